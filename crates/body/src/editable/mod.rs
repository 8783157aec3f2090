//! The editable body state machine.
//!
//! [`EditableBody`] owns the authoritative [`BodyBytes`](crate::protocol::BodyBytes) of
//! a request being composed, plus the outcome of the most recent formatting attempt.
//!
//! ```text
//!            begin_format                 settled(ok)
//!   Idle ───────────────────► Pending ───────────────────► Fulfilled
//!    ▲                          │  ▲                        │
//!    │        set_bytes         │  │ begin_format           │
//!    ├──────────────────────────┘  └──────────────┬─────────┤
//!    │                                            │         │
//!    │                          settled(err) ───► Rejected ─┘
//!    └──────────────────── set_bytes (from any state)
//! ```
//!
//! Only the latest attempt is ever observable: settlements addressed to any other
//! attempt are discarded as [`Settlement::Stale`].

mod editable_body;

pub use editable_body::EditableBody;
pub use editable_body::EncodingAttemptResult;
pub use editable_body::Settlement;
