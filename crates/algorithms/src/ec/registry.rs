//! Process-wide memoized curve lookup

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use dstu4145_params::dstu4145 as named;

use super::curve::{Curve, CurveSpec};
use crate::error::{Error, Result};

/// How a caller identifies a curve
#[derive(Clone, Copy, Debug)]
pub enum CurveRef<'a> {
    /// Named curve, by name (`DSTU_PB_257`) or dotted OID
    Name(&'a str),
    /// Explicit parameters, e.g. decoded from a certificate
    Spec(&'a CurveSpec),
}

impl<'a> From<&'a str> for CurveRef<'a> {
    fn from(name: &'a str) -> Self {
        CurveRef::Name(name)
    }
}

impl<'a> From<&'a CurveSpec> for CurveRef<'a> {
    fn from(spec: &'a CurveSpec) -> Self {
        CurveRef::Spec(spec)
    }
}

type Registry = RwLock<HashMap<CurveSpec, Arc<Curve>>>;

fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Resolve a curve, constructing and validating it on first use
///
/// Equal definitions share one `Arc<Curve>` (and so its caches). Two threads
/// racing on the same definition may both build it; one result wins.
pub fn resolve_curve<'a>(curve: impl Into<CurveRef<'a>>) -> Result<Arc<Curve>> {
    let spec = match curve.into() {
        CurveRef::Name(name) => named::find(name).map(CurveSpec::from).ok_or_else(|| {
            Error::UnsupportedCurve {
                context: "resolve_curve",
                details: format!("unknown curve {:?}", name).into(),
            }
        })?,
        CurveRef::Spec(spec) => spec.clone(),
    };

    if let Some(curve) = registry()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&spec)
    {
        return Ok(curve.clone());
    }

    let built = Curve::new(&spec)?;
    let mut map = registry().write().unwrap_or_else(PoisonError::into_inner);
    Ok(map.entry(spec).or_insert(built).clone())
}

/// Names of the built-in curves, smallest field first
pub fn named_curves() -> impl Iterator<Item = &'static str> {
    named::NAMED_CURVES.iter().map(|c| c.name)
}
