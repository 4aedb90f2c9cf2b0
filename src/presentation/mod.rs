//! # View-Models
//!
//! Screen-facing state holders. Each exposes its state as [`Observable`]
//! streams and a handful of fire-and-forget trigger methods:
//!
//! ```text
//!   screen ──trigger()──► ViewModel ──spawn──► use case ──► repository
//!     ▲                      │
//!     └──── Observable ◄─────┘  publish(Resource)
//! ```
//!
//! Fetch triggers publish once, the final envelope. Update triggers publish
//! `Loading` first, then `Success` with no payload. All work runs inside the
//! view-model's [`ViewModelScope`] and stops when the view-model is dropped.

pub mod add_bookmark;
pub mod category;
pub mod detail;
pub mod home;
pub mod observable;
pub mod scope;
pub mod trip;

pub use add_bookmark::AddBookmarkViewModel;
pub use category::CategoryViewModel;
pub use detail::DetailViewModel;
pub use home::HomeViewModel;
pub use observable::{Observable, Snapshot};
pub use scope::{CancelToken, ViewModelScope};
pub use trip::TripViewModel;
