//! The 147 SVG/CSS named colours, in alphabetical order.

/// One named colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub name: &'static str,
    pub rgb: [u8; 3],
}

impl PaletteEntry {
    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn hex(&self) -> String {
        let [r, g, b] = self.rgb;
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

const fn entry(name: &'static str, r: u8, g: u8, b: u8) -> PaletteEntry {
    PaletteEntry { name, rgb: [r, g, b] }
}

pub const PALETTE: [PaletteEntry; 147] = [
    entry("AliceBlue", 240, 248, 255),
    entry("AntiqueWhite", 250, 235, 215),
    entry("Aqua", 0, 255, 255),
    entry("Aquamarine", 127, 255, 212),
    entry("Azure", 240, 255, 255),
    entry("Beige", 245, 245, 220),
    entry("Bisque", 255, 228, 196),
    entry("Black", 0, 0, 0),
    entry("BlanchedAlmond", 255, 235, 205),
    entry("Blue", 0, 0, 255),
    entry("BlueViolet", 138, 43, 226),
    entry("Brown", 165, 42, 42),
    entry("BurlyWood", 222, 184, 135),
    entry("CadetBlue", 95, 158, 160),
    entry("Chartreuse", 127, 255, 0),
    entry("Chocolate", 210, 105, 30),
    entry("Coral", 255, 127, 80),
    entry("CornflowerBlue", 100, 149, 237),
    entry("Cornsilk", 255, 248, 220),
    entry("Crimson", 220, 20, 60),
    entry("Cyan", 0, 255, 255),
    entry("DarkBlue", 0, 0, 139),
    entry("DarkCyan", 0, 139, 139),
    entry("DarkGoldenrod", 184, 134, 11),
    entry("DarkGray", 169, 169, 169),
    entry("DarkGreen", 0, 100, 0),
    entry("DarkGrey", 169, 169, 169),
    entry("DarkKhaki", 189, 183, 107),
    entry("DarkMagenta", 139, 0, 139),
    entry("DarkOliveGreen", 85, 107, 47),
    entry("DarkOrange", 255, 140, 0),
    entry("DarkOrchid", 153, 50, 204),
    entry("DarkRed", 139, 0, 0),
    entry("DarkSalmon", 233, 150, 122),
    entry("DarkSeaGreen", 143, 188, 143),
    entry("DarkSlateBlue", 72, 61, 139),
    entry("DarkSlateGray", 47, 79, 79),
    entry("DarkSlateGrey", 47, 79, 79),
    entry("DarkTurquoise", 0, 206, 209),
    entry("DarkViolet", 148, 0, 211),
    entry("DeepPink", 255, 20, 147),
    entry("DeepSkyBlue", 0, 191, 255),
    entry("DimGray", 105, 105, 105),
    entry("DimGrey", 105, 105, 105),
    entry("DodgerBlue", 30, 144, 255),
    entry("FireBrick", 178, 34, 34),
    entry("FloralWhite", 255, 250, 240),
    entry("ForestGreen", 34, 139, 34),
    entry("Fuchsia", 255, 0, 255),
    entry("Gainsboro", 220, 220, 220),
    entry("GhostWhite", 248, 248, 255),
    entry("Gold", 255, 215, 0),
    entry("Goldenrod", 218, 165, 32),
    entry("Gray", 128, 128, 128),
    entry("Grey", 128, 128, 128),
    entry("Green", 0, 128, 0),
    entry("GreenYellow", 173, 255, 47),
    entry("Honeydew", 240, 255, 240),
    entry("HotPink", 255, 105, 180),
    entry("IndianRed", 205, 92, 92),
    entry("Indigo", 75, 0, 130),
    entry("Ivory", 255, 255, 240),
    entry("Khaki", 240, 230, 140),
    entry("Lavender", 230, 230, 250),
    entry("LavenderBlush", 255, 240, 245),
    entry("LawnGreen", 124, 252, 0),
    entry("LemonChiffon", 255, 250, 205),
    entry("LightBlue", 173, 216, 230),
    entry("LightCoral", 240, 128, 128),
    entry("LightCyan", 224, 255, 255),
    entry("LightGoldenrodYellow", 250, 250, 210),
    entry("LightGray", 211, 211, 211),
    entry("LightGreen", 144, 238, 144),
    entry("LightGrey", 211, 211, 211),
    entry("LightPink", 255, 182, 193),
    entry("LightSalmon", 255, 160, 122),
    entry("LightSeaGreen", 32, 178, 170),
    entry("LightSkyBlue", 135, 206, 250),
    entry("LightSlateGray", 119, 136, 153),
    entry("LightSlateGrey", 119, 136, 153),
    entry("LightSteelBlue", 176, 196, 222),
    entry("LightYellow", 255, 255, 224),
    entry("Lime", 0, 255, 0),
    entry("LimeGreen", 50, 205, 50),
    entry("Linen", 250, 240, 230),
    entry("Magenta", 255, 0, 255),
    entry("Maroon", 128, 0, 0),
    entry("MediumAquamarine", 102, 205, 170),
    entry("MediumBlue", 0, 0, 205),
    entry("MediumOrchid", 186, 85, 211),
    entry("MediumPurple", 147, 112, 219),
    entry("MediumSeaGreen", 60, 179, 113),
    entry("MediumSlateBlue", 123, 104, 238),
    entry("MediumSpringGreen", 0, 250, 154),
    entry("MediumTurquoise", 72, 209, 204),
    entry("MediumVioletRed", 199, 21, 133),
    entry("MidnightBlue", 25, 25, 112),
    entry("MintCream", 245, 255, 250),
    entry("MistyRose", 255, 228, 225),
    entry("Moccasin", 255, 228, 181),
    entry("NavajoWhite", 255, 222, 173),
    entry("Navy", 0, 0, 128),
    entry("OldLace", 253, 245, 230),
    entry("Olive", 128, 128, 0),
    entry("OliveDrab", 107, 142, 35),
    entry("Orange", 255, 165, 0),
    entry("OrangeRed", 255, 69, 0),
    entry("Orchid", 218, 112, 214),
    entry("PaleGoldenrod", 238, 232, 170),
    entry("PaleGreen", 152, 251, 152),
    entry("PaleTurquoise", 175, 238, 238),
    entry("PaleVioletRed", 219, 112, 147),
    entry("PapayaWhip", 255, 239, 213),
    entry("PeachPuff", 255, 218, 185),
    entry("Peru", 205, 133, 63),
    entry("Pink", 255, 192, 203),
    entry("Plum", 221, 160, 221),
    entry("PowderBlue", 176, 224, 230),
    entry("Purple", 128, 0, 128),
    entry("Red", 255, 0, 0),
    entry("RosyBrown", 188, 143, 143),
    entry("RoyalBlue", 65, 105, 225),
    entry("SaddleBrown", 139, 69, 19),
    entry("Salmon", 250, 128, 114),
    entry("SandyBrown", 244, 164, 96),
    entry("SeaGreen", 46, 139, 87),
    entry("Seashell", 255, 245, 238),
    entry("Sienna", 160, 82, 45),
    entry("Silver", 192, 192, 192),
    entry("SkyBlue", 135, 206, 235),
    entry("SlateBlue", 106, 90, 205),
    entry("SlateGray", 112, 128, 144),
    entry("SlateGrey", 112, 128, 144),
    entry("Snow", 255, 250, 250),
    entry("SpringGreen", 0, 255, 127),
    entry("SteelBlue", 70, 130, 180),
    entry("Tan", 210, 180, 140),
    entry("Teal", 0, 128, 128),
    entry("Thistle", 216, 191, 216),
    entry("Tomato", 255, 99, 71),
    entry("Turquoise", 64, 224, 208),
    entry("Violet", 238, 130, 238),
    entry("Wheat", 245, 222, 179),
    entry("White", 255, 255, 255),
    entry("WhiteSmoke", 245, 245, 245),
    entry("Yellow", 255, 255, 0),
    entry("YellowGreen", 154, 205, 50),
];

/// Exact, case-sensitive lookup by name.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static PaletteEntry> {
    PALETTE.iter().find(|entry| entry.name == name)
}
