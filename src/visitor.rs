//! Typed visitor dispatch over the component tree.
//!
//! Dispatch is double: the traversal picks the node, the node's concrete
//! kind picks the handler. The kind set is closed, so the exhaustive
//! match in [`ComponentTree::accept`] and the required trait methods
//! together guarantee at compile time that every kind is handled.

use generational_arena::Index;
use tracing::instrument;

use crate::arena::{AssemblyId, ComponentTree, NodePayload};
use crate::parts::{AssemblyKind, Part, PartKind};

/// One handler per visitable component kind.
///
/// Every method is required: extending the kind set without teaching
/// every visitor about it is a compile error. Computer has no handler —
/// the root is a pure aggregator with no visitable identity of its own.
pub trait ComponentVisitor {
    fn visit_memory(&mut self, memory: &SubAssembly);
    fn visit_graphic_card(&mut self, card: &SubAssembly);
    fn visit_cpu(&mut self, cpu: &Part);
    fn visit_keyboard(&mut self, keyboard: &Part);
    fn visit_monitor(&mut self, monitor: &Part);
    fn visit_ram(&mut self, ram: &Part);
    fn visit_rom(&mut self, rom: &Part);
    fn visit_external_disk(&mut self, disk: &Part);
    fn visit_gpu(&mut self, gpu: &Part);
    fn visit_graphic_memory(&mut self, memory: &Part);
}

/// Borrowed view of a sub-assembly handed to visitor hooks.
///
/// Exposes the display name plus the aggregate price without leaking
/// arena indices into visitor implementations.
pub struct SubAssembly<'a> {
    tree: &'a ComponentTree,
    id: AssemblyId,
    kind: AssemblyKind,
}

impl SubAssembly<'_> {
    pub fn name(&self) -> &'static str {
        self.kind.display_name()
    }

    /// Sum over the children, computed on demand.
    pub fn price(&self) -> u64 {
        self.tree.assembly_price(self.id)
    }
}

impl ComponentTree {
    /// Runs `visitor` over the tree in pre-order.
    ///
    /// The walk is deliberately asymmetric: Computer forwards to its
    /// children without a hook of its own, Memory and Graphic Card
    /// invoke their hook first and then recurse, parts invoke exactly
    /// their hook. Insertion order of children is visit order.
    #[instrument(level = "debug", skip(self, visitor))]
    pub fn accept<V: ComponentVisitor>(&self, visitor: &mut V) {
        if let Some(root) = self.root() {
            self.accept_node(root.0, visitor);
        }
    }

    fn accept_node<V: ComponentVisitor>(&self, idx: Index, visitor: &mut V) {
        let Some(node) = self.get_node(idx) else {
            return;
        };
        match &node.payload {
            NodePayload::Assembly(kind) => {
                let view = SubAssembly {
                    tree: self,
                    id: AssemblyId(idx),
                    kind: *kind,
                };
                match kind {
                    // The root aggregator is silent.
                    AssemblyKind::Computer => {}
                    AssemblyKind::Memory => visitor.visit_memory(&view),
                    AssemblyKind::GraphicCard => visitor.visit_graphic_card(&view),
                }
                for &child in &node.children {
                    self.accept_node(child, visitor);
                }
            }
            NodePayload::Part(part) => match part.kind {
                PartKind::Cpu => visitor.visit_cpu(part),
                PartKind::Keyboard => visitor.visit_keyboard(part),
                PartKind::Monitor => visitor.visit_monitor(part),
                PartKind::Ram => visitor.visit_ram(part),
                PartKind::Rom => visitor.visit_rom(part),
                PartKind::ExternalDisk => visitor.visit_external_disk(part),
                PartKind::Gpu => visitor.visit_gpu(part),
                PartKind::GraphicMemory => visitor.visit_graphic_memory(part),
            },
        }
    }
}

/// Accumulates the aggregate price of memory-class parts (RAM, ROM,
/// External Disk) during one traversal.
///
/// Created empty, mutated only while a traversal runs, read afterwards.
/// Concurrent sharing is ruled out by `&mut` access; reuse across
/// traversals would keep accumulating, so each report takes a fresh
/// instance.
#[derive(Debug, Default)]
pub struct MemoryPriceVisitor {
    total: u64,
    entries: Vec<String>,
}

impl MemoryPriceVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Running total of visited memory-class parts.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Log lines in the order the traversal encountered the parts.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    fn record(&mut self, part: &Part) {
        self.total += part.price;
        self.entries.push(part.to_string());
    }
}

impl ComponentVisitor for MemoryPriceVisitor {
    fn visit_memory(&mut self, _memory: &SubAssembly) {}

    fn visit_graphic_card(&mut self, _card: &SubAssembly) {}

    fn visit_cpu(&mut self, _cpu: &Part) {}

    fn visit_keyboard(&mut self, _keyboard: &Part) {}

    fn visit_monitor(&mut self, _monitor: &Part) {}

    fn visit_ram(&mut self, ram: &Part) {
        self.record(ram);
    }

    fn visit_rom(&mut self, rom: &Part) {
        self.record(rom);
    }

    fn visit_external_disk(&mut self, disk: &Part) {
        self.record(disk);
    }

    fn visit_gpu(&mut self, _gpu: &Part) {}

    fn visit_graphic_memory(&mut self, _memory: &Part) {}
}
