//! Source rect resolution: tile identifier to sprite sheet rectangles
//!
//! The renderer calls [`resolve`] once per visible tile and samples the
//! returned rectangles. Plain tiles produce one full-tile rect; auto tiles
//! produce four half-tile quarter rects composited clockwise from the
//! destination's top-left.

use gridmap_core::{classify, decode_auto, AutoFamily, PlainSheet, TileCategory};
use serde::{Deserialize, Serialize};

use crate::tables::ShapeTable;

/// One of the nine logical sprite sheets a level draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SheetId {
    Fluid,
    Ground,
    Wall,
    Structure,
    PlainA,
    PlainB,
    PlainC,
    PlainD,
    PlainE,
}

impl SheetId {
    /// Stable atlas slot for this sheet, 0..9.
    pub const fn index(self) -> usize {
        match self {
            SheetId::Fluid => 0,
            SheetId::Ground => 1,
            SheetId::Wall => 2,
            SheetId::Structure => 3,
            SheetId::PlainA => 4,
            SheetId::PlainB => 5,
            SheetId::PlainC => 6,
            SheetId::PlainD => 7,
            SheetId::PlainE => 8,
        }
    }

    const fn from_plain(sheet: PlainSheet) -> Self {
        match sheet {
            PlainSheet::A => SheetId::PlainA,
            PlainSheet::B => SheetId::PlainB,
            PlainSheet::C => SheetId::PlainC,
            PlainSheet::D => SheetId::PlainD,
            PlainSheet::E => SheetId::PlainE,
        }
    }

    const fn from_family(family: AutoFamily) -> Self {
        match family {
            AutoFamily::Fluid => SheetId::Fluid,
            AutoFamily::Ground => SheetId::Ground,
            AutoFamily::Wall => SheetId::Wall,
            AutoFamily::Structure => SheetId::Structure,
        }
    }
}

/// A pixel rectangle on a sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Everything the renderer needs to draw one tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderInfo {
    /// A plain tile: one full-tile rect.
    Plain { sheet: SheetId, rect: SourceRect },
    /// An auto-connecting tile: four half-tile quarters, ordered
    /// `[top-left, top-right, bottom-left, bottom-right]` of the
    /// destination cell.
    Auto {
        sheet: SheetId,
        quarters: [SourceRect; 4],
    },
}

/// Top-left corner of a kind's source block, in tile units.
///
/// Each family packs its kinds differently; fluid additionally fixes its
/// first four kinds at dedicated liquid-surface blocks and interleaves
/// surface/cascade pairs from kind 4 on (the cascade half sits six tiles
/// right of its surface partner).
pub(crate) fn auto_block(family: AutoFamily, kind: u32) -> (u32, u32) {
    match family {
        AutoFamily::Ground => (kind % 8 * 2, kind / 8 * 3),
        AutoFamily::Wall => (kind % 8 * 2, kind / 8 * 2),
        AutoFamily::Structure => {
            // roof rows are 3 tiles tall, wall rows 2: y = 0, 3, 5, 8, 10, 13
            let row = kind / 8;
            (kind % 8 * 2, (5 * row + (row & 1)) / 2)
        }
        AutoFamily::Fluid => match kind {
            0 => (0, 0),
            1 => (0, 3),
            2 => (6, 0),
            3 => (6, 3),
            _ => {
                let k = kind - 4;
                let bx = k / 2 % 2 * 8 + if k % 2 == 1 { 6 } else { 0 };
                (bx, 6 + k / 4 * 3)
            }
        },
    }
}

/// Resolve an identifier to its source rectangles.
///
/// `tile_size` is the rendered tile size in pixels (even, see
/// `Level::validate`). Returns `None` for the empty sentinel and for
/// identifiers outside every category range; any decodable identifier
/// resolves, with out-of-range shapes clamped by the tables.
pub fn resolve(id: u32, tile_size: u32) -> Option<RenderInfo> {
    match classify(id)? {
        TileCategory::Plain(sheet) => {
            // 16-column grid built from two 8-column halves
            let sx = id / 128 % 2 * 8 + id % 8;
            let sy = id % 256 / 8 % 16;
            Some(RenderInfo::Plain {
                sheet: SheetId::from_plain(sheet),
                rect: SourceRect {
                    x: sx * tile_size,
                    y: sy * tile_size,
                    width: tile_size,
                    height: tile_size,
                },
            })
        }
        TileCategory::Auto(family) => {
            let auto = decode_auto(id)?;
            let (bx, by) = auto_block(family, auto.kind);
            let offsets = ShapeTable::for_kind(family, auto.kind).entry(auto.shape);
            let half = tile_size / 2;
            let quarters = offsets.map(|[qx, qy]| SourceRect {
                x: (bx * 2 + qx as u32) * half,
                y: (by * 2 + qy as u32) * half,
                width: half,
                height: half,
            });
            Some(RenderInfo::Auto {
                sheet: SheetId::from_family(family),
                quarters,
            })
        }
    }
}
