//! Move history: the in-memory log, its text encoding, and save files.

mod codec;
mod log;
mod store;

pub use codec::{decode, decode_move, encode, encode_move, DecodedLog};
pub use log::{Move, MoveLog};
pub use store::{read_log, save_log, timestamped_path, SaveConfig, TIMESTAMP_FORMAT};
