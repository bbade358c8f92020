//! Packed tile identifier codec
//!
//! A tile identifier is a single `u32` that encodes which sprite sheet a
//! tile comes from and, for auto-connecting tiles, which pattern variant
//! ("kind") and visual variant ("shape") it currently shows. `0` is the
//! sentinel for an empty cell.
//!
//! The identifier space is partitioned into fixed half-open ranges: five
//! plain sheets (A and B..E) whose tiles are addressed directly, and four
//! auto-connecting families (fluid, ground, wall, structure) whose ranges
//! are subdivided as `base + kind * 48 + shape`.

use serde::{Deserialize, Serialize};

/// First identifier of plain sheet B. Identifier 0 itself is the empty-cell
/// sentinel, so the first usable B tile is 1.
pub const SHEET_B_BASE: u32 = 0;
/// First identifier of plain sheet C.
pub const SHEET_C_BASE: u32 = 256;
/// First identifier of plain sheet D.
pub const SHEET_D_BASE: u32 = 512;
/// First identifier of plain sheet E.
pub const SHEET_E_BASE: u32 = 768;
/// First identifier of plain sheet A. The range 1024..1536 below it is
/// reserved and never classifies.
pub const SHEET_A_BASE: u32 = 1536;
/// First identifier of the fluid family (liquid surfaces and cascades).
pub const FLUID_BASE: u32 = 2048;
/// First identifier of the ground family.
pub const GROUND_BASE: u32 = 2816;
/// First identifier of the wall family.
pub const WALL_BASE: u32 = 4352;
/// First identifier of the structure family (roof and building-wall rows).
pub const STRUCTURE_BASE: u32 = 5888;
/// One past the largest valid identifier.
pub const MAX_TILE_ID: u32 = 8192;

/// Identifier stride per auto-connecting kind. Every family reserves 48
/// shape slots per kind even when its table fills fewer (wall kinds use 16,
/// cascade kinds use 4).
pub const SHAPES_PER_KIND: u32 = 48;

/// One of the five plain (non-connecting) tile sheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlainSheet {
    A,
    B,
    C,
    D,
    E,
}

impl PlainSheet {
    /// First identifier of this sheet's range.
    pub const fn base(self) -> u32 {
        match self {
            PlainSheet::A => SHEET_A_BASE,
            PlainSheet::B => SHEET_B_BASE,
            PlainSheet::C => SHEET_C_BASE,
            PlainSheet::D => SHEET_D_BASE,
            PlainSheet::E => SHEET_E_BASE,
        }
    }
}

/// One of the four auto-connecting tile families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AutoFamily {
    /// Liquid surfaces with paired cascade (vertical flow) kinds.
    Fluid,
    /// Standard 8-direction ground terrain.
    Ground,
    /// Edge-only wall faces.
    Wall,
    /// Alternating roof (ground-style) and wall rows.
    Structure,
}

impl AutoFamily {
    /// First identifier of this family's range.
    pub const fn base(self) -> u32 {
        match self {
            AutoFamily::Fluid => FLUID_BASE,
            AutoFamily::Ground => GROUND_BASE,
            AutoFamily::Wall => WALL_BASE,
            AutoFamily::Structure => STRUCTURE_BASE,
        }
    }

    /// Number of kinds (pattern variants) in this family.
    pub const fn kind_count(self) -> u32 {
        match self {
            AutoFamily::Fluid => 16,
            AutoFamily::Ground => 32,
            AutoFamily::Wall => 32,
            AutoFamily::Structure => 48,
        }
    }

    /// One past the largest identifier of this family's range.
    pub const fn end(self) -> u32 {
        self.base() + self.kind_count() * SHAPES_PER_KIND
    }

    /// Whether `id` falls inside this family's range.
    pub const fn contains(self, id: u32) -> bool {
        id >= self.base() && id < self.end()
    }
}

/// Category of a classified tile identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileCategory {
    Plain(PlainSheet),
    Auto(AutoFamily),
}

/// A decoded auto-connecting tile identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoTile {
    pub family: AutoFamily,
    /// Pattern variant within the family, `0..family.kind_count()`.
    pub kind: u32,
    /// Visual variant within the kind, `0..SHAPES_PER_KIND`.
    pub shape: u32,
}

/// Classify a raw identifier into its category.
///
/// Returns `None` for the empty sentinel (0), the reserved gap between the
/// plain E and A sheets, and identifiers at or beyond [`MAX_TILE_ID`].
pub fn classify(id: u32) -> Option<TileCategory> {
    match id {
        0 => None,
        1..=255 => Some(TileCategory::Plain(PlainSheet::B)),
        256..=511 => Some(TileCategory::Plain(PlainSheet::C)),
        512..=767 => Some(TileCategory::Plain(PlainSheet::D)),
        768..=1023 => Some(TileCategory::Plain(PlainSheet::E)),
        1024..=1535 => None,
        1536..=2047 => Some(TileCategory::Plain(PlainSheet::A)),
        2048..=2815 => Some(TileCategory::Auto(AutoFamily::Fluid)),
        2816..=4351 => Some(TileCategory::Auto(AutoFamily::Ground)),
        4352..=5887 => Some(TileCategory::Auto(AutoFamily::Wall)),
        5888..=8191 => Some(TileCategory::Auto(AutoFamily::Structure)),
        _ => None,
    }
}

/// Whether `id` is an auto-connecting tile.
pub fn is_auto_tile(id: u32) -> bool {
    matches!(classify(id), Some(TileCategory::Auto(_)))
}

/// Decode an auto-connecting identifier into family, kind and shape.
///
/// Returns `None` exactly when [`classify`] does not report an auto family.
pub fn decode_auto(id: u32) -> Option<AutoTile> {
    let Some(TileCategory::Auto(family)) = classify(id) else {
        return None;
    };
    let offset = id - family.base();
    Some(AutoTile {
        family,
        kind: offset / SHAPES_PER_KIND,
        shape: offset % SHAPES_PER_KIND,
    })
}

/// Encode family, kind and shape into a packed identifier.
///
/// Exact inverse of [`decode_auto`]. Callers must keep `kind` below the
/// family's kind count and `shape` below [`SHAPES_PER_KIND`]; shapes are
/// clamped at lookup time, not here.
pub fn encode_auto(family: AutoFamily, kind: u32, shape: u32) -> u32 {
    debug_assert!(kind < family.kind_count());
    debug_assert!(shape < SHAPES_PER_KIND);
    family.base() + kind * SHAPES_PER_KIND + shape
}

/// Sheet and sheet-local cell index of a plain tile identifier.
pub fn plain_cell(id: u32) -> Option<(PlainSheet, u32)> {
    let Some(TileCategory::Plain(sheet)) = classify(id) else {
        return None;
    };
    Some((sheet, id - sheet.base()))
}
