use anyhow::{bail, Context, Result};
use digraph_algo::algo::cpm::{self, Job};
use digraph_algo::algo::{acyclicity, longest_paths, sccs, top_sort};
use digraph_algo::prelude::*;
use dsi_progress_logger::prelude::*;

fn main() -> Result<()> {
    stderrlog::new()
        .verbosity(2)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;
    let operation = std::env::args().nth(1).context("no operation provided")?;
    let path = std::env::args().nth(2).context("no input file provided")?;
    let input =
        std::fs::read_to_string(&path).with_context(|| format!("cannot read {}", path))?;
    let mut pl = progress_logger![display_memory = true];

    match operation.as_str() {
        "tarjan" => {
            let graph = parse_digraph(&input)?;
            let sccs = sccs::tarjan(&graph, &mut pl);
            println!("{} components", sccs.num_components());
            for (vertex, component) in sccs.components().iter().enumerate() {
                println!("{} {}", vertex, component);
            }
        }
        "top-sort" => {
            let graph = parse_digraph(&input)?;
            let order = top_sort(&graph, &mut pl)?;
            for vertex in order.iter() {
                println!("{}", vertex);
            }
        }
        "acyclicity" => {
            let graph = parse_digraph(&input)?;
            println!("{}", acyclicity(&graph, &mut pl));
        }
        "longest-paths" => {
            let source = std::env::args()
                .nth(3)
                .context("no source vertex provided")?
                .parse()?;
            let graph = parse_edge_weighted(&input)?;
            let paths = longest_paths(&graph, source, &mut pl)?;
            for vertex in 0..graph.num_vertices() {
                if paths.has_path_to(vertex) {
                    print!("{} ({}):", vertex, paths.dist_to(vertex));
                    for edge in paths.path_to(vertex)? {
                        print!("  {}", edge);
                    }
                    println!();
                } else {
                    println!("{}: unreachable", vertex);
                }
            }
        }
        "cpm" => {
            let jobs = parse_jobs(&input)?;
            let schedule = cpm::schedule(&jobs, &mut pl)?;
            println!(" job    start   finish");
            for job in 0..schedule.num_jobs() {
                println!(
                    "{:4} {:8.1} {:8.1}",
                    job,
                    schedule.start_time(job),
                    schedule.finish_time(job)
                );
            }
            println!("completion time: {:.1}", schedule.completion_time());
        }
        _ => bail!("unknown operation {:?}", operation),
    }

    Ok(())
}

/// Parses a vertex count followed by one `from to` pair per edge.
fn parse_digraph(input: &str) -> Result<Digraph> {
    let mut tokens = input.split_whitespace();
    let num_vertices = tokens.next().context("missing vertex count")?.parse()?;
    let mut graph = Digraph::new(num_vertices);
    while let Some(from) = tokens.next() {
        let to = tokens.next().context("edge with a missing endpoint")?;
        graph.add_edge(from.parse()?, to.parse()?)?;
    }
    Ok(graph)
}

/// Parses a vertex count followed by one `from to weight` triple per edge.
fn parse_edge_weighted(input: &str) -> Result<EdgeWeightedDigraph> {
    let mut tokens = input.split_whitespace();
    let num_vertices = tokens.next().context("missing vertex count")?.parse()?;
    let mut graph = EdgeWeightedDigraph::new(num_vertices);
    while let Some(from) = tokens.next() {
        let to = tokens.next().context("edge with a missing endpoint")?;
        let weight = tokens.next().context("edge with a missing weight")?;
        graph.add_edge(from.parse()?, to.parse()?, weight.parse()?)?;
    }
    Ok(graph)
}

/// Parses a job count, then one job per line: a duration followed by the
/// indices of its successors.
fn parse_jobs(input: &str) -> Result<Vec<Job>> {
    let mut lines = input.lines().filter(|line| !line.trim().is_empty());
    let num_jobs = lines
        .next()
        .context("missing job count")?
        .trim()
        .parse::<usize>()?;
    let mut jobs = Vec::with_capacity(num_jobs);
    for line in lines {
        let mut tokens = line.split_whitespace();
        let duration = tokens.next().context("missing job duration")?.parse()?;
        let successors = tokens
            .map(|token| token.parse::<usize>())
            .collect::<Result<Vec<_>, _>>()?;
        jobs.push(Job {
            duration,
            successors,
        });
    }
    if jobs.len() != num_jobs {
        bail!("expected {} jobs, found {}", num_jobs, jobs.len());
    }
    Ok(jobs)
}
