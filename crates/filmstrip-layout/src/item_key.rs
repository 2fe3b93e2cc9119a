#![forbid(unsafe_code)]

//! Stable element keys for virtualized list rows and grid cells.
//!
//! Virtualized containers ask for a key per slot so rendered elements keep
//! their identity as participants join, leave, or scroll. Slots past the
//! populated range get an `empty-{index}` key.

use std::fmt;

use filmstrip_core::ParticipantId;

use crate::context::ReorderContext;
use crate::error::LayoutError;

/// Key for one virtualized slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKey<'a> {
    /// The local participant's own tile.
    Local,
    Remote(&'a ParticipantId),
    /// No participant occupies this slot.
    Empty(usize),
}

impl fmt::Display for ItemKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => f.write_str("local"),
            Self::Remote(id) => write!(f, "{id}"),
            Self::Empty(index) => write!(f, "empty-{index}"),
        }
    }
}

/// Key for row `index` of a remote-only list.
#[must_use]
pub fn list_item_key(index: usize, remote: &[ParticipantId]) -> ItemKey<'_> {
    remote
        .get(index)
        .map_or(ItemKey::Empty(index), ItemKey::Remote)
}

/// Key for a grid cell that may hold the local tile.
///
/// With reordering the local tile occupies the first slot and remote
/// participants follow; otherwise it trails the remote participants.
/// Recorders never get a local slot.
pub fn grid_item_key<'a>(
    row: usize,
    column: usize,
    columns: u32,
    remote: &'a [ParticipantId],
    context: &ReorderContext,
) -> Result<ItemKey<'a>, LayoutError> {
    if columns == 0 {
        return Err(LayoutError::InvalidColumns { columns });
    }
    let index = row.saturating_mul(columns as usize).saturating_add(column);
    let local_first = context.thumbnails_reordered && !context.disable_self_view;

    let last_slot = if context.i_am_recorder {
        remote.len().checked_sub(1)
    } else {
        Some(remote.len())
    };
    match last_slot {
        Some(last) if index <= last => {}
        _ => return Ok(ItemKey::Empty(index)),
    }

    let local_index = if local_first { 0 } else { remote.len() };
    if !context.i_am_recorder && index == local_index {
        return Ok(ItemKey::Local);
    }

    let remote_index = if local_first && !context.i_am_recorder {
        index - 1
    } else {
        index
    };
    Ok(remote
        .get(remote_index)
        .map_or(ItemKey::Empty(index), ItemKey::Remote))
}
