use crate::backend::{build_chain, BackendBuildError, BackendParseError, BackendPreference};
use crate::env::{env_or, parse_flag, GLYPH_LOG_BACKEND_ENV, GLYPH_LOG_STDOUT_ENV};
use crate::facade::{set_global, Facade};
use serde::Deserialize;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Registry;

/// Configuration of the process-wide facade.
///
/// **Fields**
/// - `backend`: where the probe chain starts (`auto` by default).
/// - `enable_stdout`: if `true`, a `tracing_subscriber` fmt layer is
///   installed as the global subscriber so the structured backend has
///   somewhere to write.
///
/// Deserializable so it can sit inside an application's own config file:
///
/// ```toml
/// [logging]
/// backend = "structured"
/// enable_stdout = true
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FacadeConfig {
    pub backend: BackendPreference,
    pub enable_stdout: bool,
}

impl Default for FacadeConfig {
    fn default() -> Self {
        Self {
            backend: BackendPreference::Auto,
            enable_stdout: true,
        }
    }
}

impl FacadeConfig {
    /// Build a config from `GLYPH_LOG_BACKEND` and `GLYPH_LOG_STDOUT`,
    /// using the defaults for unset variables.
    pub fn from_env() -> Result<Self, InitError> {
        let defaults = FacadeConfig::default();

        let backend: BackendPreference = env_or(GLYPH_LOG_BACKEND_ENV, "auto").parse()?;

        let enable_stdout = match std::env::var(GLYPH_LOG_STDOUT_ENV) {
            Ok(value) => parse_flag(&value).ok_or(InitError::InvalidFlag {
                key: GLYPH_LOG_STDOUT_ENV,
                value,
            })?,
            Err(_) => defaults.enable_stdout,
        };

        Ok(FacadeConfig { backend, enable_stdout })
    }
}

/// Error type returned when installing the process-wide facade.
#[derive(thiserror::Error, Debug)]
pub enum InitError {
    #[error("invalid backend preference: {0}")]
    Backend(#[from] BackendParseError),

    #[error("invalid value for {key}: {value:?}")]
    InvalidFlag { key: &'static str, value: String },

    #[error(transparent)]
    Build(#[from] BackendBuildError),

    #[error("failed to install tracing subscriber: {0}")]
    Subscriber(#[from] SetGlobalDefaultError),

    #[error("glyph-log facade is already initialized")]
    AlreadyInitialized,
}

/// Install the process-wide facade described by `config`.
///
/// **Effects**
///
/// Sets the instance used by the logging macros and the free functions in
/// [`facade`](crate::facade). With `enable_stdout`, also installs a
/// [`Registry`] with a fmt layer as the global `tracing` subscriber.
///
/// **Returns**
/// - `Err(InitError::AlreadyInitialized)` if a facade is already in place,
///   including one created lazily by an earlier logging call.
/// - `Err(InitError::Subscriber(..))` if another global subscriber exists;
///   the facade is installed regardless and will route to that subscriber.
pub fn init_facade_with_config(config: FacadeConfig) -> Result<(), InitError> {
    let facade = Facade::new(build_chain(config.backend)?);
    set_global(facade).map_err(|_| InitError::AlreadyInitialized)?;

    if config.enable_stdout {
        let subscriber = Registry::default().with(tracing_subscriber::fmt::layer());
        tracing::subscriber::set_global_default(subscriber)?;
    }
    Ok(())
}

/// Install the process-wide facade configured from the environment.
///
/// Equivalent to [`init_facade_with_config`] with [`FacadeConfig::from_env`].
pub fn init_facade() -> Result<(), InitError> {
    init_facade_with_config(FacadeConfig::from_env()?)
}

/// Facade used when logging starts before any explicit initialization.
///
/// Never touches global `tracing` state. An invalid environment is reported
/// on stderr and replaced by the defaults.
pub(crate) fn facade_from_env() -> Facade {
    let backend = match FacadeConfig::from_env() {
        Ok(config) => config.backend,
        Err(e) => {
            eprintln!("glyph-log: {e}, using automatic backend selection");
            BackendPreference::Auto
        }
    };

    match build_chain(backend) {
        Ok(chain) => Facade::new(chain),
        Err(e) => {
            eprintln!("glyph-log: {e}, using automatic backend selection");
            Facade::auto()
        }
    }
}
