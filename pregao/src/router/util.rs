use pregao_core::{PregaoError, Symbol};

/// Collapse a set of provider errors into a uniform `PregaoError` outcome.
///
/// Rules:
/// - If `attempted_any` is false → `Unsupported(capability)`.
/// - If all errors are `ProviderTimeout` → `AllProvidersTimedOut(capability)`.
/// - If all errors are `NotFound` → `NotFound(not_found_what)`.
/// - Else → `AllProvidersFailed(errors)`.
pub fn collapse_errors(
    capability: &str,
    attempted_any: bool,
    errors: Vec<PregaoError>,
    not_found_what: String,
) -> PregaoError {
    if !attempted_any {
        return PregaoError::unsupported(capability);
    }
    if !errors.is_empty()
        && errors
            .iter()
            .all(|e| matches!(e, PregaoError::ProviderTimeout { .. }))
    {
        return PregaoError::AllProvidersTimedOut {
            capability: capability.to_string(),
        };
    }
    if !errors.is_empty()
        && errors
            .iter()
            .all(|e| matches!(e, PregaoError::NotFound { .. }))
    {
        return PregaoError::not_found(not_found_what);
    }
    PregaoError::AllProvidersFailed(errors)
}

/// Turn a provider outcome into an optional value.
///
/// Recoverable errors become `Ok(None)`; configuration faults stay `Err`.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub fn into_absence<T>(
    symbol: &Symbol,
    capability: &'static str,
    res: Result<T, PregaoError>,
) -> Result<Option<T>, PregaoError> {
    match res {
        Ok(v) => Ok(Some(v)),
        Err(e) if e.is_recoverable() => {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                target: "pregao::router",
                symbol = %symbol,
                capability,
                cause = %e,
                "no data; resolving to absence",
            );
            Ok(None)
        }
        Err(e) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                target: "pregao::router",
                symbol = %symbol,
                capability,
                error = %e,
                "non-recoverable provider error",
            );
            Err(e)
        }
    }
}

/// Validate a caller-supplied ticker. Invalid input is an unknown ticker, not a fault.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub fn parse_symbol(ticker: &str) -> Option<Symbol> {
    match Symbol::new(ticker) {
        Ok(s) => Some(s),
        Err(e) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                target: "pregao::router",
                ticker,
                cause = %e,
                "invalid ticker; resolving to absence",
            );
            None
        }
    }
}
