//! portfolio-ui - client for a personal portfolio page backend
//!
//! Uses Elm Architecture (Model/Message/Update) over an explicit in-memory
//! document, with a reqwest backend client behind the `PortfolioApi` seam.

pub mod api;
pub mod app;
pub mod config;
pub mod dom;
pub mod form;
pub mod message;
pub mod model;
pub mod update;

pub use api::{Comment, HttpApi, PortfolioApi};
pub use app::App;
pub use dom::{Display, Dom, NodeId};
pub use message::Message;
pub use model::{Model, UiSelectors};
pub use update::update;
