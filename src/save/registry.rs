use crate::error::{Error, Result};

/// Positional floor-id to sprite-name table.
///
/// Indices mirror the game's internal block enumeration order exactly; that
/// ordering is a compatibility contract with every existing save file, so
/// entries are only ever appended, never reordered. Entry 0 doubles as the
/// placeholder sprite for best-effort rendering of ids this table does not
/// know.
pub static FLOOR_SPRITES: &[&str] = &[
    // Actually air
    "titanium2",
    // Actually spawn
    "titanium1",
    "deepwater",
    "water",
    "tainted-water",
    "tar",
    "stone1",
    "craters1",
    "char1",
    "sand1",
    "darksand1",
    "ice1",
    "snow1",
    "darksand-tainted-water",
    "holostone1",
    "rocks1",
    "sporerocks1",
    "icerocks1",
    "cliffs1",
    "spore-pine",
    "snow-pine",
    "pine",
    "shrubs1",
    "white-tree",
    "white-tree-dead",
    "spore-cluster1",
    "ice-snow1",
    "sand-water",
    "darksand-water",
    "dunerocks1",
    "sandrocks1",
    "moss1",
    "spore-moss1",
    "shale1",
    "shalerocks1",
    "shale-boulder1",
    "sand-boulder1",
    "grass1",
    "salt",
    "metal-floor",
    "metal-floor-damaged1",
    "metal-floor-2",
    "metal-floor-3",
    "metal-floor-5",
    "ignarock1",
    "magmarock1",
    "hotrock1",
    "snowrocks1",
    "rock1",
    "snowrock1",
    "saltrocks1",
    "dark-panel-1",
    "dark-panel-2",
    "dark-panel-3",
    "dark-panel-4",
    "dark-panel-5",
    "dark-panel-6",
    "dark-metal1",
    "pebbles1",
    "tendrils1",
    "copper1",
    "lead1",
    "scrap1",
    "coal1",
    "titanium1",
    "thorium1",
    "silicon-smelter",
    "kiln",
    "graphite-press",
    "plastanium-compressor",
    "multi-press",
    "phase-weaver",
    "alloy-smelter",
    "pyratite-mixer",
    "blast-mixer",
    "cryofluidmixer-top",
    "melter",
    "separator",
    "spore-press",
    "pulverizer",
    "incinerator",
    "coal-centrifuge",
    "power-source",
    "power-void",
    "item-source",
    "item-void",
    "liquid-source",
    "liquid-void",
    "message",
    "illuminator",
    "copper-wall",
    "copper-wall-large",
    "titanium-wall",
    "titanium-wall-large",
    "plastanium-wall",
    "plastanium-wall-large",
    "thorium-wall",
    "thorium-wall-large",
    "door",
    "door-large",
    "phase-wall",
    "phase-wall-large",
    "surge-wall",
    "surge-wall-large",
    "mender",
    "mend-projector",
    "overdrive-projector",
    "force-projector",
    "shock-mine",
    "scrap-wall1",
    "scrap-wall-large1",
    "scrap-wall-huge1",
    "scrap-wall-gigantic",
    "thruster",
    // conveyor family: first variant sprite of each
    "conveyor-0-0",
    "titanium-conveyor-0-0",
    "armored-conveyor-0-0",
    "distributor",
    "junction",
    "phase-conduit-bridge",
    "phase-conveyor",
    "sorter",
    "inverted-sorter",
    "router",
    "overflow-gate",
    "underflow-gate",
    "mass-driver",
    "mechanical-pump",
    "rotary-pump",
    "thermal-pump",
    "conduit-top-0",
    "pulse-conduit-top-0",
    "plated-conduit-top-0",
    "liquid-router-top",
    "liquid-tank-top",
    "liquid-junction",
    "bridge-conduit",
    "phase-conduit",
    "combustion-generator",
    "thermal-generator",
    "turbine-generator",
    "differential-generator",
    "rtg-generator",
    "solar-panel",
    "solar-panel-large",
    "thorium-reactor",
    "impact-reactor",
    "battery",
    "battery-large",
    "power-node",
    "power-node-large",
    "surge-tower",
    "diode",
];

/// Resolve a floor id to its canonical sprite name.
pub fn resolve(id: i16) -> Result<&'static str> {
    usize::try_from(id)
        .ok()
        .and_then(|index| FLOOR_SPRITES.get(index))
        .copied()
        .ok_or(Error::UnknownTileId { id })
}

/// Sprite name used in place of ids outside the table when rendering in
/// lenient mode.
pub fn placeholder() -> &'static str {
    FLOOR_SPRITES[0]
}
