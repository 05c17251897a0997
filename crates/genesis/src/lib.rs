#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod document;
pub use document::{Genesis, GenesisAccount};

mod error;
pub use error::GenesisError;

mod plan;
pub use plan::{AccountPlan, PlannedAccount};

mod template;
pub use template::{GENESIS_HINT, render_template};
