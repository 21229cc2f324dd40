//! Maps a case's method onto the capability a source exposes.

use discovery_error::DiscoveryError;
use discovery_sources::Source;
use discovery_types::{Cx, Item, QueryMethod};
use tracing::debug;

use crate::case::CaseMethod;
use crate::failure::HarnessFault;

/// Raw result of one dispatch: whatever items came back, and the error.
///
/// Get results are wrapped into a one-element list so item checks are the
/// same for every method; a failed Get yields an empty list.
#[derive(Debug, Default)]
pub struct Dispatched {
    pub items: Vec<Item>,
    pub error: Option<DiscoveryError>,
}

impl Dispatched {
    fn from_items(result: Result<Vec<Item>, DiscoveryError>) -> Self {
        match result {
            Ok(items) => Self { items, error: None },
            Err(err) => Self {
                items: Vec::new(),
                error: Some(err),
            },
        }
    }
}

/// Invoke `source` once with the capability `method` names.
///
/// # Errors
///
/// Returns a [`HarnessFault`] when the method is unrecognized or Search is
/// requested from a source without the search capability. Errors from the
/// source itself are carried in [`Dispatched::error`].
pub fn dispatch(
    cx: &Cx,
    source: &dyn Source,
    method: &CaseMethod,
    scope: &str,
    query: &str,
) -> Result<Dispatched, HarnessFault> {
    let method = match method {
        CaseMethod::Known(method) => *method,
        CaseMethod::Unrecognized(raw) => {
            return Err(HarnessFault::InvalidMethod {
                method: raw.clone(),
            });
        }
    };
    debug!(source = source.name(), %method, scope, query, "dispatching query");

    let dispatched = match method {
        QueryMethod::List => Dispatched::from_items(source.list(cx, scope)),
        QueryMethod::Search => {
            let searchable = source
                .as_searchable()
                .ok_or_else(|| HarnessFault::NotSearchable {
                    source_name: source.name().to_owned(),
                })?;
            Dispatched::from_items(searchable.search(cx, scope, query))
        }
        QueryMethod::Get => Dispatched::from_items(source.get(cx, scope, query).map(|item| vec![item])),
    };
    Ok(dispatched)
}
