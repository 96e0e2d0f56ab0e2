//! The fixed reference build and name-based assembly lookup.

use tracing::instrument;

use crate::arena::{AssemblyId, ComponentTree};
use crate::errors::{CatalogError, CatalogResult};
use crate::parts::{AssemblyKind, Part, PartKind};

/// Assembles the reference computer build with its literal prices.
///
/// Computer{CPU, Keyboard, Monitor, Memory{RAM, ROM, External Disk},
/// Graphic Card{GPU, Graphic Memory}}. Insertion order is visit order,
/// so the memory report lists RAM, ROM, External Disk in that sequence.
#[instrument(level = "debug")]
pub fn standard_build() -> ComponentTree {
    let mut tree = ComponentTree::new();

    let computer = tree.add_assembly(AssemblyKind::Computer, None);
    tree.add_part(Part::new(PartKind::Cpu, 400), computer);
    tree.add_part(Part::new(PartKind::Keyboard, 60), computer);
    tree.add_part(Part::new(PartKind::Monitor, 120), computer);

    let memory = tree.add_assembly(AssemblyKind::Memory, Some(computer));
    tree.add_part(Part::new(PartKind::Ram, 140), memory);
    tree.add_part(Part::new(PartKind::Rom, 90), memory);
    tree.add_part(Part::new(PartKind::ExternalDisk, 150), memory);

    let card = tree.add_assembly(AssemblyKind::GraphicCard, Some(computer));
    tree.add_part(Part::new(PartKind::Gpu, 200), card);
    tree.add_part(Part::new(PartKind::GraphicMemory, 100), card);

    tree
}

/// Resolves a user-supplied assembly name to its node in `tree`.
///
/// Accepts "computer", "memory" and "graphic-card" (also the
/// underscore and squashed spellings), case-insensitive.
#[instrument(level = "debug", skip(tree))]
pub fn find_assembly(tree: &ComponentTree, name: &str) -> CatalogResult<AssemblyId> {
    let kind = match name.to_ascii_lowercase().as_str() {
        "computer" => AssemblyKind::Computer,
        "memory" => AssemblyKind::Memory,
        "graphic-card" | "graphic_card" | "graphiccard" => AssemblyKind::GraphicCard,
        _ => return Err(CatalogError::UnknownAssembly(name.to_string())),
    };
    tree.find_assembly(kind)
        .ok_or_else(|| CatalogError::UnknownAssembly(name.to_string()))
}
