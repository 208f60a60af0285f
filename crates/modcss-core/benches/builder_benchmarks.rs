//! Statement building benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use modcss_core::builder::{BuildSettings, StyleBuilder, StyleRule};
use modcss_core::declaration::rules::{FullwidthFn, IconPlacementFn, RadiusOverflowFn};
use modcss_core::{AttrTree, AttrValue, Breakpoint, BreakpointOrder, RenderCache, State};

fn module_trees() -> (AttrTree, AttrTree, AttrTree) {
    let fullwidth = AttrTree::new()
        .with(Breakpoint::Desktop, State::Value, AttrValue::from("on"))
        .with(Breakpoint::Phone, State::Value, AttrValue::from("off"));
    let radius = AttrTree::new().with(
        Breakpoint::Desktop,
        State::Value,
        AttrValue::map([
            ("top_left", AttrValue::from("4px")),
            ("top_right", AttrValue::from("4px")),
            ("bottom_right", AttrValue::from("4px")),
            ("bottom_left", AttrValue::from("4px")),
        ]),
    );
    let icon = AttrTree::new()
        .with(
            Breakpoint::Desktop,
            State::Value,
            AttrValue::map([("placement", AttrValue::from("left"))]),
        )
        .with(
            Breakpoint::Tablet,
            State::Value,
            AttrValue::map([("placement", AttrValue::from("right"))]),
        );
    (fullwidth, radius, icon)
}

fn bench_build(c: &mut Criterion) {
    let order = BreakpointOrder::default();
    let (fullwidth, radius, icon) = module_trees();

    c.bench_function("build_three_rule_module", |b| {
        let builder = StyleBuilder::new(&order, BuildSettings::new(".mod_0"));
        b.iter(|| {
            let rules = [
                StyleRule::new(&fullwidth, &FullwidthFn),
                StyleRule::new(&radius, &RadiusOverflowFn),
                StyleRule::new(&icon, &IconPlacementFn),
            ];
            black_box(builder.build_css(&rules))
        });
    });

    c.bench_function("build_three_rule_module_cached", |b| {
        let builder = StyleBuilder::new(&order, BuildSettings::new(".mod_0"));
        let mut cache = RenderCache::new();
        b.iter(|| {
            let rules = [
                StyleRule::new(&fullwidth, &FullwidthFn),
                StyleRule::new(&radius, &RadiusOverflowFn),
                StyleRule::new(&icon, &IconPlacementFn),
            ];
            black_box(builder.build_cached(&rules, &mut cache))
        });
    });
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
