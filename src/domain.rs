#![cfg(feature = "std")]

//! Binary snapshots of a game, for handing state to a front end or saving it.

use crate::engine::{Board, GameState};

/// Version byte written ahead of every snapshot.
pub const SNAPSHOT_VERSION: u8 = 1;

/// Encode `state` as a version byte followed by its bincode body.
pub fn encode_state(state: &GameState) -> anyhow::Result<Vec<u8>> {
    let body = bincode::serialize(state)?;
    let mut bytes = Vec::with_capacity(body.len() + 1);
    bytes.push(SNAPSHOT_VERSION);
    bytes.extend_from_slice(&body);
    Ok(bytes)
}

/// Decode a snapshot written by [`encode_state`], rejecting impossible positions.
pub fn decode_state(bytes: &[u8]) -> anyhow::Result<GameState> {
    let (&version, body) = bytes
        .split_first()
        .ok_or_else(|| anyhow::anyhow!("empty snapshot"))?;
    if version != SNAPSHOT_VERSION {
        return Err(anyhow::anyhow!(
            "Snapshot version mismatch: expected {}, got {}",
            SNAPSHOT_VERSION,
            version
        ));
    }
    let state: GameState = bincode::deserialize(body)?;
    Board::from_masks(state.white, state.black).map_err(|e| anyhow::anyhow!(e))?;
    Ok(state)
}
