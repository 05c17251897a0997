#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod artifact;
pub use artifact::{Artifact, Constructor, RoleWatches, artifact, catalog};

mod error;
pub use error::ContractError;

mod interface;
pub use interface::Interface;

mod line;
pub use line::{EventLine, address_hex, format_ether};

mod role;
pub use role::Role;

mod watch;
pub use watch::{EventMessage, Watch, WatchSet};

pub mod bidding;
pub mod marketplace;
pub mod receive_ether;
pub mod reputation;
