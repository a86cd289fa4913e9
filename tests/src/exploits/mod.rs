//! # Exploit Simulations
//!
//! Each module plays an adversarial relayer or a damaged node and asserts
//! that the connection state is left exactly as it was.
//!
//! | Attack | Defense |
//! |--------|---------|
//! | Replay of an accepted commit | Strict height monotonicity |
//! | Forged or borrowed signatures | Per-signer Ed25519 verification over height-bound sign bytes |
//! | Duplicate signer padding | Structural validation rejects repeats |
//! | Outsider padding | Only listed validators count toward power |
//! | Chain confusion | Checkpoint chain must match the message |
//! | Corrupt store bytes | Decode errors surface as fatal, never as defaults |

pub mod replay;
