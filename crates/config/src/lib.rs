//! Configuration for the React Query hook generator.
//!
//! A config file (`codegen.yml`, `codegen.json`, `.codegenrc`, ...) lists the
//! documents to read and the output files to generate, each with its own
//! plugin options:
//!
//! ```yaml
//! documents: "src/**/*.graphql"
//! generates:
//!   src/generated/hooks.ts:
//!     config:
//!       fetcher: graphql-request
//! ```

mod config;
mod error;
mod loader;

pub use config::{CodegenConfig, DocumentsConfig, OutputConfig, PluginConfig};
pub use error::{ConfigError, Result};
pub use loader::{find_config, load_config, load_config_from_str};
