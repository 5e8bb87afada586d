//! Deferred, early-exit computations over outcomes.
//!
//! A [`ResultFlow`] lets a sequence of outcome-producing steps be written as
//! straight-line async code. Inside a builder, [`FlowHelpers::try_to`]
//! unwraps an outcome and `?` stops the flow on the first failure:
//!
//! ```rust
//! use resultflow::flow::ResultFlow;
//! use resultflow::outcome::Outcome;
//!
//! #[derive(Debug, PartialEq)]
//! enum PlayError {
//!     PlayerNotFound(u32),
//!     BoardgameNotFound(u32),
//! }
//!
//! async fn find_player(id: u32) -> Outcome<PlayError, String> {
//!     if id == 1 { Outcome::success("ada".into()) } else { Outcome::failure(PlayError::PlayerNotFound(id)) }
//! }
//!
//! async fn find_boardgame(id: u32) -> Outcome<PlayError, String> {
//!     if id == 9 { Outcome::success("Azul".into()) } else { Outcome::failure(PlayError::BoardgameNotFound(id)) }
//! }
//!
//! let create_play = |player_id: u32, boardgame_id: u32| {
//!     ResultFlow::<PlayError, String>::of(move |helpers| async move {
//!         let player = helpers.try_to(find_player(player_id)).await?;
//!         let boardgame = helpers.try_to(find_boardgame(boardgame_id)).await?;
//!         Ok(format!("{player} played {boardgame}"))
//!     })
//! };
//!
//! futures::executor::block_on(async {
//!     assert_eq!(create_play(1, 9).run().await, Outcome::Success("ada played Azul".into()));
//!     assert_eq!(
//!         create_play(2, 9).run().await,
//!         Outcome::Failure(PlayError::PlayerNotFound(2))
//!     );
//! });
//! ```
//!
//! The early exit is an ordinary return value ([`Halt`]), never an unwind,
//! so a panic inside a flow is a genuine fault and is left to propagate.

mod helpers;
mod result_flow;

pub use helpers::{FlowHelpers, FutureHelpers, Halt, Step};
pub use result_flow::ResultFlow;

static_assertions::assert_impl_all!(FlowHelpers<String>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Halt<String>: Send, Sync);
