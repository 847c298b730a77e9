//! Клиентская часть жизненных циклов: хранилище, транспорт, сессия и доска

pub mod board;
pub mod error;
pub mod session;
pub mod store;
pub mod transport;

pub use board::{badge, field, lifecycle_board, BoardConfig};
pub use error::LifecycleError;
pub use session::LifecycleSession;
pub use store::{BoardQuery, LifecycleStore, SortKey};
pub use transport::{CredentialProvider, HttpLifecycleTransport, LifecycleTransport};
