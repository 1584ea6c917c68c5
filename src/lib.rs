//! Koyomi - era-matching for Japanese and Korean given names
//!
//! A small HTTP service that looks up Japanese given names, derives a
//! popularity-era profile from hand-authored yearly top-10 rankings, and
//! recommends Korean names whose popularity era roughly matches. Key design
//! points:
//!
//! - **Lock-free reads**: the name store uses ArcSwap for contention-free
//!   snapshot access
//! - **Immutable records**: similarity and recommendation results are value
//!   objects; stored records are never annotated in place
//! - **Integer scoring**: all ranking math is deterministic and stable-sorted

#![warn(clippy::clone_on_ref_ptr)]
#![warn(clippy::unnecessary_to_owned)]

pub mod data;
pub mod era;
pub mod error;
pub mod recommend;
pub mod romaji;
pub mod runtime;
pub mod search;
pub mod server;
pub mod similarity;
pub mod store;
pub mod trend;

pub use error::ServiceError;
pub use recommend::{recommendations, Recommendation};
pub use runtime::build_runtime;
pub use search::search_japanese;
pub use server::{ApiServer, AppState, ServerConfig};
pub use similarity::{similar_names, SimilarName};
pub use store::{Gender, NameRecord, NameStore};
pub use trend::{calculate, peak_year, Trend, TrendStats};
