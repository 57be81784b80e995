use citynav_core::{find_route, Graph, RouteError, Seed, Weight, UNLIMITED};
use std::time::Instant;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let node_count: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(200_000);

    if mode == "help" || mode == "--help" {
        println!("Usage: citynav-bench [mode] [node_count]");
        println!();
        println!("Modes:");
        println!("  all         Run every generator plus the seed graph (default)");
        println!("  seed        All-pairs routing over the bundled Delhi graph");
        println!("  grid        Street grid with varied block lengths");
        println!("  random      Erdos-Renyi uniform random weighted edges");
        println!("  smallworld  Ring of neighborhoods with long-range expressways");
        println!();
        println!("Default node_count: 200000");
        return;
    }

    println!("citynav-bench");
    println!("=============");
    println!();

    let generators: Vec<(&str, fn(u64) -> Graph)> = match mode {
        "seed" => vec![],
        "grid" => vec![("Street grid", gen_grid)],
        "random" => vec![("Erdos-Renyi random", gen_random)],
        "smallworld" => vec![("Small-world ring", gen_small_world)],
        "all" => vec![
            ("Street grid", gen_grid as fn(u64) -> Graph),
            ("Erdos-Renyi random", gen_random),
            ("Small-world ring", gen_small_world),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    if mode == "seed" || mode == "all" {
        run_seed_benchmark();
    }

    for (name, generator) in generators {
        run_benchmark(name, generator, node_count);
    }
}

fn run_seed_benchmark() {
    println!("--- Bundled Delhi seed ---");

    let t = Instant::now();
    let graph = match Graph::from_seed(&Seed::delhi()) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Seed rejected: {}", e);
            return;
        }
    };
    println!(
        "Built in {:.3}ms: {} nodes, {} edges ({} unique)",
        t.elapsed().as_secs_f64() * 1000.0,
        graph.node_count(),
        graph.edge_count(),
        graph.edges().len()
    );

    let names: Vec<&str> = graph.nodes().iter().map(|n| n.id.as_str()).collect();
    let t = Instant::now();
    let mut total_cost = 0u64;
    for from in &names {
        for to in &names {
            if let Ok(route) = find_route(&graph, from, to, UNLIMITED) {
                total_cost += route.cost;
            }
        }
    }
    let elapsed = t.elapsed();
    let queries = names.len() * names.len();
    println!(
        "{} all-pairs queries in {:.2}ms ({:.1}us/query, cost checksum {})",
        queries,
        elapsed.as_secs_f64() * 1000.0,
        elapsed.as_secs_f64() * 1_000_000.0 / queries as f64,
        total_cost
    );
    println!();
}

fn run_benchmark(name: &str, generator: fn(u64) -> Graph, node_count: u64) {
    println!("--- {} ---", name);
    println!("Target: {} nodes", node_count);

    let t = Instant::now();
    let graph = generator(node_count);
    let gen_time = t.elapsed();
    println!(
        "Generated in {:.2}s: {} nodes, {} edges, ~{:.1}MB",
        gen_time.as_secs_f64(),
        graph.node_count(),
        graph.edge_count(),
        graph.memory_usage() as f64 / 1_048_576.0
    );

    if graph.node_count() < 2 {
        println!("(graph too small to route)");
        println!();
        return;
    }

    println!();
    println!("{:>12} {:>12} {:>8} {:>10}", "target", "cost", "hops", "time");
    println!("{:->12} {:->12} {:->8} {:->10}", "", "", "", "");

    // Route from node 0 to targets spread across the id range
    let last = graph.node_count() as u64 - 1;
    let mut targets: Vec<u64> = [1, 10, 100, 1_000, 10_000, 100_000]
        .into_iter()
        .filter(|&t| t < last)
        .collect();
    targets.push(last);

    for target in targets {
        let to = node_name(target);
        let t = Instant::now();
        let result = find_route(&graph, "n0", &to, UNLIMITED);
        let elapsed = t.elapsed();
        match result {
            Ok(route) => println!(
                "{:>12} {:>12} {:>8} {:>8.2}ms",
                to,
                route.cost,
                route.hops(),
                elapsed.as_secs_f64() * 1000.0
            ),
            Err(RouteError::Unreachable { .. }) => println!(
                "{:>12} {:>12} {:>8} {:>8.2}ms",
                to,
                "-",
                "-",
                elapsed.as_secs_f64() * 1000.0
            ),
            Err(e) => println!("{:>12} error: {}", to, e),
        }
    }
    println!();
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
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
    fn weight(&mut self, min: Weight, max: Weight) -> Weight {
        min + self.next((max - min + 1) as u64) as Weight
    }
}

fn node_name(i: u64) -> String {
    format!("n{}", i)
}

/// Insert nodes `n0..n{count}` up front so ids match the numeric suffix.
fn with_nodes(count: u64) -> Graph {
    let mut graph = Graph::with_capacity(count as usize);
    for i in 0..count {
        graph.add_node(&node_name(i), (i % 1000) as i32, (i / 1000) as i32);
    }
    graph
}

/// Street grid: each intersection connects right and down, block lengths 1–9.
///
/// Many near-equal routes between distant corners. Stresses the heap with
/// lots of equal-cost ties and stale entries.
fn gen_grid(node_count: u64) -> Graph {
    let side = (node_count as f64).sqrt().max(1.0) as u64;
    let mut graph = with_nodes(side * side);
    let mut rng = FastRng::new(4242);

    for row in 0..side {
        for col in 0..side {
            let id = row * side + col;
            if col + 1 < side {
                let w = rng.weight(1, 9);
                graph.add_edge(&node_name(id), &node_name(id + 1), w);
            }
            if row + 1 < side {
                let w = rng.weight(1, 9);
                graph.add_edge(&node_name(id), &node_name(id + side), w);
            }
        }
    }

    graph
}

/// Erdos-Renyi: uniform random edges, ~5 per node, weights 0–20.
///
/// Baseline topology with no structure. Zero-weight edges included.
fn gen_random(node_count: u64) -> Graph {
    let target_edges = node_count * 5;
    let mut graph = with_nodes(node_count);
    let mut rng = FastRng::new(54321);

    for _ in 0..target_edges {
        let from = rng.next(node_count);
        let to = rng.next(node_count);
        if from != to {
            let w = rng.weight(0, 20);
            graph.add_edge(&node_name(from), &node_name(to), w);
        }
    }

    graph
}

/// Small-world: ring lattice of cheap local streets plus a few expensive
/// long-range expressways.
///
/// Connect each node to K nearest neighbors on a ring, then rewire each edge
/// with probability p to a random node at a higher cost.
fn gen_small_world(node_count: u64) -> Graph {
    let k = 4u64;
    let p = 0.05f64;
    let mut graph = with_nodes(node_count);
    let mut rng = FastRng::new(67890);

    for i in 0..node_count {
        for j in 1..=k {
            let neighbor = (i + j) % node_count;

            if rng.next_f64() < p {
                let rewired = rng.next(node_count);
                if rewired != i {
                    let w = rng.weight(20, 60);
                    graph.add_edge(&node_name(i), &node_name(rewired), w);
                    continue;
                }
            }
            let w = rng.weight(1, 5);
            graph.add_edge(&node_name(i), &node_name(neighbor), w);
        }
    }

    graph
}
