//! Introspection for verification tooling
//!
//! A read-only view of everything the engine knows about one identifier,
//! computed with the same codec and addressing functions as the render
//! path. Debug overlays and test harnesses dump this instead of poking at
//! the tables directly.

use gridmap_core::{classify, decode_auto, TileCategory};
use serde::Serialize;

use crate::resolve::auto_block;
use crate::tables::ShapeTable;

/// Decoded fields of one tile identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TileInfo {
    pub id: u32,
    pub category: TileCategory,
    /// Kind and shape, present for auto-connecting tiles only.
    pub kind: Option<u32>,
    pub shape: Option<u32>,
    /// Composition table the kind uses.
    pub table: Option<ShapeTable>,
    /// Source block top-left in tile units on the family's sheet.
    pub block: Option<(u32, u32)>,
}

/// Decode `id` for inspection. `None` exactly when [`classify`] fails.
pub fn inspect(id: u32) -> Option<TileInfo> {
    let category = classify(id)?;
    match category {
        TileCategory::Plain(_) => Some(TileInfo {
            id,
            category,
            kind: None,
            shape: None,
            table: None,
            block: None,
        }),
        TileCategory::Auto(family) => {
            let auto = decode_auto(id)?;
            Some(TileInfo {
                id,
                category,
                kind: Some(auto.kind),
                shape: Some(auto.shape),
                table: Some(ShapeTable::for_kind(family, auto.kind)),
                block: Some(auto_block(family, auto.kind)),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridmap_core::{encode_auto, AutoFamily, PlainSheet};

    #[test]
    fn rejects_what_classify_rejects() {
        assert_eq!(inspect(0), None);
        assert_eq!(inspect(1100), None);
        assert_eq!(inspect(8192), None);
    }

    #[test]
    fn plain_tiles_have_no_auto_fields() {
        let info = inspect(700).unwrap();
        assert_eq!(info.category, TileCategory::Plain(PlainSheet::D));
        assert_eq!(info.kind, None);
        assert_eq!(info.shape, None);
        assert_eq!(info.table, None);
    }

    #[test]
    fn auto_fields_match_the_codec() {
        let id = encode_auto(AutoFamily::Fluid, 5, 2);
        let info = inspect(id).unwrap();
        assert_eq!(info.kind, Some(5));
        assert_eq!(info.shape, Some(2));
        assert_eq!(info.table, Some(ShapeTable::Cascade));
        assert_eq!(info.block, Some((6, 6)));
    }

    #[test]
    fn serializes_for_debug_dumps() {
        let id = encode_auto(AutoFamily::Ground, 1, 47);
        let json = serde_json::to_value(inspect(id).unwrap()).unwrap();
        assert_eq!(json["kind"], 1);
        assert_eq!(json["shape"], 47);
        assert_eq!(json["table"], "Floor");
    }
}
