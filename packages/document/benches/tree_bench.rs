use criterion::{black_box, criterion_group, criterion_main, Criterion};
use storefront_document::{find_block_for_component, find_node, BlockInstance, ComponentInstance, ComponentKind};

fn build_page(blocks: usize, depth: usize) -> Vec<BlockInstance> {
    (0..blocks)
        .map(|b| {
            let mut node = ComponentInstance::new(format!("leaf-{b}"), ComponentKind::Text);
            for d in 0..depth {
                node = ComponentInstance::new(format!("row-{b}-{d}"), ComponentKind::Row).with_child(node);
            }
            BlockInstance::new(format!("block-{b}"), "textBlock").with_child(node)
        })
        .collect()
}

fn find_last_leaf(c: &mut Criterion) {
    let page = build_page(40, 6);

    c.bench_function("find_node_last_leaf", |b| {
        b.iter(|| find_node(black_box(&page), black_box("leaf-39")))
    });

    c.bench_function("find_block_for_component", |b| {
        b.iter(|| find_block_for_component(black_box(&page), black_box("leaf-20")))
    });
}

fn find_missing(c: &mut Criterion) {
    let page = build_page(40, 6);

    c.bench_function("find_node_missing", |b| {
        b.iter(|| find_node(black_box(&page), black_box("does-not-exist")))
    });
}

criterion_group!(benches, find_last_leaf, find_missing);
criterion_main!(benches);
