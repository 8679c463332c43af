use std::collections::VecDeque;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use graph_search_core::{BreadthFirstSearch, DepthFirstSearch, Graph, VertexId};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_VERTEX_COUNT: usize = 1_000_000;
const MIN_VERTEX_COUNT: usize = 64;

type Generator = fn(usize) -> Result<Graph>;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let vertex_count: usize = match args.get(2) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("invalid vertex_count '{}'", raw))?,
        None => DEFAULT_VERTEX_COUNT,
    };

    if mode == "help" || mode == "--help" {
        println!("Usage: graph-search-bench [mode] [vertex_count]");
        println!();
        println!("Modes:");
        println!("  all         Run all generators and benchmark each (default)");
        println!("  tree        Fractal branching tree (deep paths, no cycles)");
        println!("  scalefree   Preferential attachment via endpoint sampling (hub-and-spoke)");
        println!("  smallworld  Watts-Strogatz ring lattice + shortcuts");
        println!("  random      Erdos-Renyi uniform random edges");
        println!("  barbell     Two dense cliques connected by a thin bridge");
        println!("  dla         Diffusion-limited aggregation (organic branching)");
        println!();
        println!("Default vertex_count: {}", DEFAULT_VERTEX_COUNT);
        println!("Log level: RUST_LOG (default info)");
        return Ok(());
    }

    if vertex_count < MIN_VERTEX_COUNT {
        bail!("vertex_count must be at least {}", MIN_VERTEX_COUNT);
    }

    let generators: Vec<(&str, Generator)> = match mode {
        "tree" => vec![("Fractal tree", gen_tree)],
        "scalefree" => vec![("Scale-free (endpoint sampling)", gen_scale_free)],
        "smallworld" => vec![("Small-world (Watts-Strogatz)", gen_small_world)],
        "random" => vec![("Erdos-Renyi random", gen_random)],
        "barbell" => vec![("Barbell (clique-bridge-clique)", gen_barbell)],
        "dla" => vec![("DLA (organic branching)", gen_dla)],
        "all" => vec![
            ("Fractal tree", gen_tree as Generator),
            ("Scale-free (endpoint sampling)", gen_scale_free),
            ("Small-world (Watts-Strogatz)", gen_small_world),
            ("Erdos-Renyi random", gen_random),
            ("Barbell (clique-bridge-clique)", gen_barbell),
            ("DLA (organic branching)", gen_dla),
        ],
        other => bail!("unknown mode '{}'; use --help for options", other),
    };

    info!(mode, vertex_count, "graph-search-bench starting");
    println!("graph-search-bench");
    println!("==================");
    println!();

    for (name, generator) in generators {
        run_benchmark(name, generator, vertex_count)
            .with_context(|| format!("benchmark '{}' failed", name))?;
    }

    Ok(())
}

fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let t = Instant::now();
    let value = f();
    (value, t.elapsed())
}

fn ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

fn run_benchmark(name: &str, generator: Generator, vertex_count: usize) -> Result<()> {
    println!("--- {} ---", name);
    println!("Target: {} vertices", vertex_count);

    let (graph, gen_time) = timed(|| generator(vertex_count));
    let graph = graph?;
    println!(
        "Generated in {:.2}s: {} vertices, {} edges, ~{:.0}MB",
        gen_time.as_secs_f64(),
        graph.vertex_count(),
        graph.edge_count(),
        graph.memory_usage() as f64 / 1_048_576.0
    );

    let bfs = BreadthFirstSearch::new(&graph);
    let dfs = DepthFirstSearch::new(&graph);

    println!();
    println!("{:>8} {:>12} {:>10}", "depth", "found", "time");
    println!("{:->8} {:->12} {:->10}", "", "", "");

    for depth in [1, 2, 3, 5, 10] {
        let (found, elapsed) = timed(|| bfs.neighborhood(0, depth));
        let found = found?;
        println!("{:>8} {:>12} {:>8.1}ms", depth, found.len(), ms(elapsed));
        // Stop if we already found everything
        if found.len() + 1 >= graph.vertex_count() {
            println!("{:>8} (entire graph reached)", "");
            break;
        }
    }

    println!();
    println!("{:<24} {:>14} {:>10}", "query", "result", "time");
    println!("{:-<24} {:->14} {:->10}", "", "", "");

    let (order, elapsed) = timed(|| bfs.traverse(0));
    report("bfs traverse", format!("{} visited", order?.len()), elapsed);

    let (distances, elapsed) = timed(|| bfs.distances(0));
    let reachable = distances?.iter().filter(|d| d.is_some()).count();
    report("bfs distances", format!("{} reachable", reachable), elapsed);

    let (levels, elapsed) = timed(|| bfs.levels(0));
    report("bfs levels", format!("{} levels", levels?.len()), elapsed);

    let far: VertexId = graph.vertex_count() - 1;
    let (path, elapsed) = timed(|| bfs.shortest_path(0, far));
    let path = path?;
    let summary = if path.is_empty() {
        "no path".to_string()
    } else {
        format!("{} hops", path.len() - 1)
    };
    report(&format!("shortest path 0 -> {}", far), summary, elapsed);

    let (order, elapsed) = timed(|| dfs.traverse_iterative(0));
    report("dfs traverse", format!("{} visited", order?.len()), elapsed);

    let (components, elapsed) = timed(|| dfs.connected_component_count());
    report("components", format!("{}", components), elapsed);

    println!();
    Ok(())
}

fn report(query: &str, result: String, elapsed: Duration) {
    debug!(query, %result, elapsed_ms = ms(elapsed), "query timed");
    println!("{:<24} {:>14} {:>8.1}ms", query, result, ms(elapsed));
}

// ---------------------------------------------------------------------------
// Generators: all O(n) or O(n + edges), single-threaded, deterministic
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: usize) -> usize {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.0 >> 33) % max as u64) as usize
    }
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Fractal tree: every vertex spawns three children, level by level.
///
/// Logarithmic depth with exponential width; acyclic, one component.
fn gen_tree(vertex_count: usize) -> Result<Graph> {
    let branching = 3;
    let mut graph = Graph::new(vertex_count)?;

    let mut next_id = 1;
    let mut frontier: Vec<VertexId> = vec![0];

    while next_id < vertex_count && !frontier.is_empty() {
        let mut next_frontier = Vec::with_capacity(frontier.len() * branching);
        for &parent in &frontier {
            for _ in 0..branching {
                if next_id >= vertex_count {
                    break;
                }
                graph.add_edge(parent, next_id)?;
                next_frontier.push(next_id);
                next_id += 1;
            }
        }
        frontier = next_frontier;
    }

    Ok(graph)
}

/// Scale-free via endpoint sampling (O(edges), not O(n²)).
///
/// Picking a uniformly random endpoint from the edge list selects vertices
/// in proportion to their degree.
fn gen_scale_free(vertex_count: usize) -> Result<Graph> {
    let edges_per_vertex = 10;
    let mut graph = Graph::new(vertex_count)?;
    let mut rng = FastRng::new(12345);

    let mut endpoints: Vec<VertexId> = Vec::with_capacity(vertex_count * edges_per_vertex * 2);

    // Seed: small clique
    let seed = 5;
    for i in 0..seed {
        for j in (i + 1)..seed {
            graph.add_edge(i, j)?;
            endpoints.push(i);
            endpoints.push(j);
        }
    }

    for new_vertex in seed..vertex_count {
        let attach = edges_per_vertex.min(new_vertex);
        for _ in 0..attach {
            let target = endpoints[rng.next(endpoints.len())];
            if target != new_vertex {
                graph.add_edge(new_vertex, target)?;
                endpoints.push(new_vertex);
                endpoints.push(target);
            }
        }
    }

    Ok(graph)
}

/// Small-world (Watts-Strogatz): ring lattice + random rewiring.
///
/// Each vertex links to its K clockwise neighbors; each link is rewired to
/// a random vertex with probability p.
fn gen_small_world(vertex_count: usize) -> Result<Graph> {
    let k = 10;
    let p = 0.05f64;
    let mut graph = Graph::new(vertex_count)?;
    let mut rng = FastRng::new(67890);

    for i in 0..vertex_count {
        for j in 1..=k {
            let neighbor = (i + j) % vertex_count;
            if rng.next_f64() < p {
                let rewired = rng.next(vertex_count);
                graph.add_edge(i, if rewired != i { rewired } else { neighbor })?;
            } else {
                graph.add_edge(i, neighbor)?;
            }
        }
    }

    Ok(graph)
}

/// Erdos-Renyi: ~10 uniform random edges per vertex, no structure.
fn gen_random(vertex_count: usize) -> Result<Graph> {
    let target_edges = vertex_count * 10;
    let mut graph = Graph::new(vertex_count)?;
    let mut rng = FastRng::new(54321);

    for _ in 0..target_edges {
        let from = rng.next(vertex_count);
        let to = rng.next(vertex_count);
        if from != to {
            graph.add_edge(from, to)?;
        }
    }

    Ok(graph)
}

/// Barbell: two dense cliques joined by a chain of bridge vertices.
///
/// Worst case for "find path through bottleneck". Clique B takes the spare
/// vertex when the cliques cannot split evenly, so the last id is always in
/// a clique.
fn gen_barbell(vertex_count: usize) -> Result<Graph> {
    let bridge_len = 10;
    let clique_a = (vertex_count - bridge_len) / 2;
    let clique_b = vertex_count - bridge_len - clique_a;
    let mut graph = Graph::new(vertex_count)?;
    let mut rng = FastRng::new(99999);

    let mut add_clique = |graph: &mut Graph, start: VertexId, size: usize| -> Result<()> {
        for i in 0..size {
            for _ in 0..20.min(size - 1) {
                let target = rng.next(size);
                if target != i {
                    graph.add_edge(start + i, start + target)?;
                }
            }
        }
        Ok(())
    };

    // Clique A: 0..clique_a
    add_clique(&mut graph, 0, clique_a)?;

    // Bridge: chain from the last vertex of A to the first vertex of B
    let bridge_start = clique_a;
    graph.add_edge(clique_a - 1, bridge_start)?;
    for id in bridge_start + 1..bridge_start + bridge_len {
        graph.add_edge(id - 1, id)?;
    }
    let b_start = bridge_start + bridge_len;
    graph.add_edge(b_start - 1, b_start)?;

    // Clique B: b_start..vertex_count
    add_clique(&mut graph, b_start, clique_b)?;

    Ok(graph)
}

/// DLA (Diffusion-Limited Aggregation): organic branching growth.
///
/// Each new vertex attaches to a recent "surface" vertex, with an
/// occasional second link that closes a loop.
fn gen_dla(vertex_count: usize) -> Result<Graph> {
    let mut graph = Graph::new(vertex_count)?;
    let mut rng = FastRng::new(77777);

    // Oldest surface vertices are evicted first.
    let surface_max = 10_000;
    let mut surface: VecDeque<VertexId> = VecDeque::with_capacity(surface_max + 1);
    surface.push_back(0);

    for new_vertex in 1..vertex_count {
        let attach_to = surface[rng.next(surface.len())];
        graph.add_edge(new_vertex, attach_to)?;

        // 10% chance of a second connection (creates loops / shortcuts)
        if rng.next(10) == 0 && new_vertex > 1 {
            let other = rng.next(new_vertex);
            if other != attach_to {
                graph.add_edge(new_vertex, other)?;
            }
        }

        surface.push_back(new_vertex);
        if surface.len() > surface_max {
            surface.pop_front();
        }
    }

    Ok(graph)
}
