use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use scenario_path_engine::{
    IdAllocator, Location, PathEditor, PathRules, RoadGraph, RoadGraphRouter, SpawnMarker,
    StraightLineRouter,
};
use std::hint::black_box;
use std::sync::Arc;

/// Zickzack-Pfad mit `waypoints` Wegpunkten im freien Modus.
fn build_free_path(waypoints: usize, router: &StraightLineRouter) -> PathEditor {
    let mut ids = IdAllocator::new();
    let mut editor = PathEditor::new(SpawnMarker::new(Vec2::ZERO, 1.5), true, PathRules::default());
    editor
        .append(Location::xy(0.0, 0.0), false, router, &mut ids)
        .expect("Anker");
    for i in 1..waypoints {
        let y = if i % 2 == 0 { 0.0 } else { 8.0 };
        editor
            .append(Location::xy(i as f32 * 10.0, y), false, router, &mut ids)
            .expect("Anhängen");
    }
    editor
}

fn build_grid_graph(size: u64) -> RoadGraph {
    let id = |x: u64, y: u64| y * size + x + 1;
    let mut nodes = Vec::new();
    let mut connections = Vec::new();
    for y in 0..size {
        for x in 0..size {
            nodes.push(format!(
                r#"{{"id":{},"x":{},"y":{}}}"#,
                id(x, y),
                x * 10,
                y * 10
            ));
            if x + 1 < size {
                connections.push(format!(
                    r#"{{"from":{},"to":{},"direction":"dual"}}"#,
                    id(x, y),
                    id(x + 1, y)
                ));
            }
            if y + 1 < size {
                connections.push(format!(
                    r#"{{"from":{},"to":{},"direction":"dual"}}"#,
                    id(x, y),
                    id(x, y + 1)
                ));
            }
        }
    }
    let json = format!(
        r#"{{"nodes":[{}],"connections":[{}]}}"#,
        nodes.join(","),
        connections.join(",")
    );
    RoadGraph::from_json(&json).expect("Gitter")
}

fn bench_move_waypoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_waypoint");
    let router = StraightLineRouter::new(0.5);

    for &waypoints in &[100usize, 1_000usize] {
        let editor = build_free_path(waypoints, &router);
        let middle = editor
            .path()
            .get(waypoints / 2)
            .map(|w| w.id)
            .expect("Wegpunkt in der Mitte");

        group.bench_with_input(
            BenchmarkId::new("free_middle", waypoints),
            &editor,
            |b, editor| {
                let mut editor = editor.clone();
                let mut flip = false;
                b.iter(|| {
                    flip = !flip;
                    let y = if flip { 3.0 } else { 5.0 };
                    let x = (waypoints / 2) as f32 * 10.0;
                    editor
                        .move_waypoint(middle, Location::xy(x, y), &router)
                        .expect("Verschieben");
                    black_box(editor.buffer().len())
                })
            },
        );
    }

    group.finish();
}

fn bench_graph_routing(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_routing");

    for &size in &[20u64, 60u64] {
        let router = RoadGraphRouter::new(Arc::new(build_grid_graph(size)), 3.0, 1.0);
        let far = (size - 1) as f32 * 10.0;

        group.bench_with_input(BenchmarkId::new("astar_diagonal", size), &router, |b, r| {
            b.iter(|| {
                let segment = scenario_path_engine::Pathfinder::find_path(
                    r,
                    black_box(Location::xy(0.0, 0.0)),
                    black_box(Location::xy(far, far)),
                    false,
                )
                .expect("Weg im Gitter");
                black_box(segment.points.len())
            })
        });
    }

    group.finish();
}

criterion_group!(core_benches, bench_move_waypoint, bench_graph_routing);
criterion_main!(core_benches);
