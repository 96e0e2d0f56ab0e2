//! Tests for visitor dispatch and the memory price report

use rsbom::catalog::standard_build;
use rsbom::parts::Part;
use rsbom::visitor::{ComponentVisitor, MemoryPriceVisitor, SubAssembly};

// ============================================================
// Memory Price Report Tests
// ============================================================

#[test]
fn given_standard_build_when_running_memory_visitor_then_total_is_380() {
    let build = standard_build();
    let mut visitor = MemoryPriceVisitor::new();
    build.accept(&mut visitor);

    assert_eq!(visitor.total(), 380);
}

#[test]
fn given_standard_build_when_running_memory_visitor_then_log_is_ordered() {
    let build = standard_build();
    let mut visitor = MemoryPriceVisitor::new();
    build.accept(&mut visitor);

    assert_eq!(
        visitor.entries(),
        ["RAM: 140 AED", "ROM: 90 AED", "External Disk: 150 AED"]
    );
}

#[test]
fn given_standard_build_when_running_memory_visitor_then_non_memory_parts_are_absent() {
    let build = standard_build();
    let mut visitor = MemoryPriceVisitor::new();
    build.accept(&mut visitor);

    for excluded in ["CPU", "Keyboard", "Monitor", "GPU", "Graphic Memory"] {
        assert!(
            !visitor.entries().iter().any(|e| e.starts_with(excluded)),
            "{} must not appear in the memory report",
            excluded
        );
    }
    // 380 is exactly RAM + ROM + External Disk, nothing else contributes
    assert_eq!(visitor.total(), 140 + 90 + 150);
}

#[test]
fn given_unmutated_tree_when_running_fresh_visitors_then_results_repeat() {
    let build = standard_build();

    let mut first = MemoryPriceVisitor::new();
    build.accept(&mut first);
    let mut second = MemoryPriceVisitor::new();
    build.accept(&mut second);

    assert_eq!(first.total(), second.total());
    assert_eq!(first.entries(), second.entries());
}

// ============================================================
// Traversal Order Tests
// ============================================================

/// Records every hook invocation, assemblies and parts alike.
#[derive(Default)]
struct TraceVisitor {
    events: Vec<String>,
}

impl TraceVisitor {
    fn part(&mut self, part: &Part) {
        self.events.push(part.name().to_string());
    }

    fn assembly(&mut self, assembly: &SubAssembly) {
        self.events.push(format!("enter {}", assembly.name()));
    }
}

impl ComponentVisitor for TraceVisitor {
    fn visit_memory(&mut self, memory: &SubAssembly) {
        self.assembly(memory);
    }

    fn visit_graphic_card(&mut self, card: &SubAssembly) {
        self.assembly(card);
    }

    fn visit_cpu(&mut self, cpu: &Part) {
        self.part(cpu);
    }

    fn visit_keyboard(&mut self, keyboard: &Part) {
        self.part(keyboard);
    }

    fn visit_monitor(&mut self, monitor: &Part) {
        self.part(monitor);
    }

    fn visit_ram(&mut self, ram: &Part) {
        self.part(ram);
    }

    fn visit_rom(&mut self, rom: &Part) {
        self.part(rom);
    }

    fn visit_external_disk(&mut self, disk: &Part) {
        self.part(disk);
    }

    fn visit_gpu(&mut self, gpu: &Part) {
        self.part(gpu);
    }

    fn visit_graphic_memory(&mut self, memory: &Part) {
        self.part(memory);
    }
}

#[test]
fn given_standard_build_when_tracing_traversal_then_order_is_asymmetric_preorder() {
    let build = standard_build();
    let mut visitor = TraceVisitor::default();
    build.accept(&mut visitor);

    // The root aggregator never announces itself; sub-assemblies are
    // announced before their children.
    assert_eq!(
        visitor.events,
        vec![
            "CPU",
            "Keyboard",
            "Monitor",
            "enter Memory",
            "RAM",
            "ROM",
            "External Disk",
            "enter Graphic Card",
            "GPU",
            "Graphic Memory",
        ]
    );
}

#[test]
fn given_standard_build_when_tracing_traversal_then_computer_has_no_hook() {
    let build = standard_build();
    let mut visitor = TraceVisitor::default();
    build.accept(&mut visitor);

    assert!(!visitor.events.iter().any(|e| e.contains("Computer")));
}

// ============================================================
// Sub-Assembly View Tests
// ============================================================

/// Captures the aggregate prices handed to the assembly hooks.
#[derive(Default)]
struct AssemblyPriceProbe {
    memory: Option<u64>,
    graphic_card: Option<u64>,
}

impl ComponentVisitor for AssemblyPriceProbe {
    fn visit_memory(&mut self, memory: &SubAssembly) {
        self.memory = Some(memory.price());
    }

    fn visit_graphic_card(&mut self, card: &SubAssembly) {
        self.graphic_card = Some(card.price());
    }

    fn visit_cpu(&mut self, _cpu: &Part) {}

    fn visit_keyboard(&mut self, _keyboard: &Part) {}

    fn visit_monitor(&mut self, _monitor: &Part) {}

    fn visit_ram(&mut self, _ram: &Part) {}

    fn visit_rom(&mut self, _rom: &Part) {}

    fn visit_external_disk(&mut self, _disk: &Part) {}

    fn visit_gpu(&mut self, _gpu: &Part) {}

    fn visit_graphic_memory(&mut self, _memory: &Part) {}
}

#[test]
fn given_standard_build_when_probing_assembly_hooks_then_views_expose_prices() {
    let build = standard_build();
    let mut probe = AssemblyPriceProbe::default();
    build.accept(&mut probe);

    assert_eq!(probe.memory, Some(380));
    assert_eq!(probe.graphic_card, Some(300));
}

#[test]
fn given_other_visitors_ran_before_when_reporting_then_report_is_unchanged() {
    // Traversal must have no observable side effect on the tree.
    let build = standard_build();

    let mut trace = TraceVisitor::default();
    build.accept(&mut trace);
    let mut probe = AssemblyPriceProbe::default();
    build.accept(&mut probe);

    let mut report = MemoryPriceVisitor::new();
    build.accept(&mut report);
    assert_eq!(report.total(), 380);
    assert_eq!(
        report.entries(),
        ["RAM: 140 AED", "ROM: 90 AED", "External Disk: 150 AED"]
    );
}
