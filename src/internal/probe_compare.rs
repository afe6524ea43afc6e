#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::pedantic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]
#![allow(warnings)]

//! Compares probe-chain growth of open-addressing collision strategies as
//! the load factor rises, and plots the results. Double hashing derives its
//! step from a second hash of the key; the other strategies stand in for the
//! classic alternatives it is usually measured against.

use plotters::prelude::*;
use rand::Rng;

// Prime, so double-hashing steps in [1, TABLE_SIZE - 1] are coprime with it.
const TABLE_SIZE: usize = 100_003;
// Load factors from 0.1 to 0.95 in equal steps.
const NUM_LOAD_FACTORS: usize = 10;

const METHODS: [&str; 4] =
    ["Linear Probing", "Fixed Stride", "Exponential Stride", "Double Hashing"];
const MAX_PROBES: usize = 100; // Prevent unbounded walks at high load

fn primary_hash(key: usize, size: usize) -> usize {
    key % size
}

// Step derived from an independent slice of the key's bits, offset by one so
// it never degenerates to a zero step.
fn secondary_step(key: usize, size: usize) -> usize {
    (key / size) % (size - 1) + 1
}

fn linear_probing(table: &mut Vec<Option<usize>>, key: usize) -> usize {
    let mut index = primary_hash(key, TABLE_SIZE);
    let mut probes = 1;

    while table[index].is_some() && probes < MAX_PROBES {
        index = (index + 1) % TABLE_SIZE;
        probes += 1;
    }

    if table[index].is_none() {
        table[index] = Some(key);
    }

    probes
}

fn fixed_stride(table: &mut Vec<Option<usize>>, key: usize) -> usize {
    let mut index = primary_hash(key, TABLE_SIZE);
    let mut probes = 1;

    while table[index].is_some() && probes < MAX_PROBES {
        index = (index + 7) % TABLE_SIZE;
        probes += 1;
    }

    if table[index].is_none() {
        table[index] = Some(key);
    }

    probes
}

fn exponential_stride(table: &mut Vec<Option<usize>>, key: usize) -> usize {
    let mut index = primary_hash(key, TABLE_SIZE);
    let mut probes = 1;
    let mut jump = 1;

    while table[index].is_some() && probes < MAX_PROBES {
        index = (index + jump) % TABLE_SIZE;
        jump = (jump.saturating_mul(2)).min(TABLE_SIZE / 2);
        probes += 1;
    }

    if table[index].is_none() {
        table[index] = Some(key);
    }

    probes
}

fn double_hashing(table: &mut Vec<Option<usize>>, key: usize) -> usize {
    let step = secondary_step(key, TABLE_SIZE);
    let mut index = primary_hash(key, TABLE_SIZE);
    let mut probes = 1;

    while table[index].is_some() && probes < MAX_PROBES {
        index = (index + step) % TABLE_SIZE;
        probes += 1;
    }

    if table[index].is_none() {
        table[index] = Some(key);
    }

    probes
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Generate load factors from 0.1 to 0.95
    let load_factors: Vec<f64> = (0..NUM_LOAD_FACTORS)
        .map(|i| 0.1 + (0.95 - 0.1) * (i as f64) / ((NUM_LOAD_FACTORS - 1) as f64))
        .collect();

    let num_keys: Vec<usize> =
        load_factors.iter().map(|&load| (TABLE_SIZE as f64 * load) as usize).collect();

    println!("Load factors: {:?}", load_factors);
    println!("Number of keys: {:?}", num_keys);

    let mut average_probes: Vec<Vec<f64>> = vec![Vec::new(); METHODS.len()];
    let mut worst_case_probes: Vec<Vec<usize>> = vec![Vec::new(); METHODS.len()];

    // Generate random keys outside the loop to ensure fair comparison
    let mut rng = rand::rng();
    let max_keys_needed = *num_keys.iter().max().unwrap();
    let keys: Vec<usize> =
        (0..max_keys_needed).map(|_| rng.random_range(1..1_000_000_000)).collect();

    for &n_keys in &num_keys {
        println!("Testing with {} keys", n_keys);

        for (method_idx, &method) in METHODS.iter().enumerate() {
            let mut table: Vec<Option<usize>> = vec![None; TABLE_SIZE];
            let mut probes_list: Vec<usize> = Vec::with_capacity(n_keys);

            for &key in keys.iter().take(n_keys) {
                let probes = match method {
                    "Linear Probing" => linear_probing(&mut table, key),
                    "Fixed Stride" => fixed_stride(&mut table, key),
                    "Exponential Stride" => exponential_stride(&mut table, key),
                    "Double Hashing" => double_hashing(&mut table, key),
                    _ => panic!("Unknown method"),
                };
                probes_list.push(probes);
            }

            let avg = probes_list.iter().sum::<usize>() as f64 / probes_list.len() as f64;
            let worst_case = *probes_list.iter().max().unwrap_or(&0);

            average_probes[method_idx].push(avg);
            worst_case_probes[method_idx].push(worst_case);

            println!("  {}: Avg probes = {:.2}, Worst = {}", method, avg, worst_case);
        }
    }

    let font_family = "sans-serif";

    let colors = [
        RGBColor(220, 50, 50),  // Bright red
        RGBColor(50, 90, 220),  // Bright blue
        RGBColor(50, 180, 50),  // Bright green
        RGBColor(180, 50, 180), // Bright magenta
    ];

    let line_width = 2;
    let marker_size = 4;
    let text_size = 16;
    let title_size = 35;

    // Plot 1: Average probe chain length
    let root = BitMapBackend::new("average_probe_length.png", (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_avg = average_probes
        .iter()
        .flat_map(|v| v.iter())
        .fold(0.0, |max, &x| if x > max { x } else { max }) *
        1.1; // Add 10% margin

    let mut chart = ChartBuilder::on(&root)
        .caption("Average Probe Chain Length by Strategy", (font_family, title_size))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .right_y_label_area_size(10)
        .build_cartesian_2d(0..(num_keys.len() - 1), 0.0..max_avg)?;

    let x_labels: Vec<String> = num_keys.iter().map(|&n| n.to_string()).collect();

    chart
        .configure_mesh()
        .x_labels(num_keys.len() - 1)
        .x_label_formatter(&|x| {
            if *x < x_labels.len() { x_labels[*x].clone() } else { "".to_string() }
        })
        .x_desc("Number of Keys Inserted")
        .y_desc("Average Probes per Insert")
        .axis_desc_style((font_family, text_size))
        .draw()?;

    // Mark the two-thirds load factor the step table resizes at
    let resize_load_idx = num_keys.len() * 2 / 3;
    if resize_load_idx < num_keys.len() - 1 {
        let reference_style = ShapeStyle::from(&BLACK.mix(0.3)).stroke_width(1);
        chart
            .draw_series(LineSeries::new(
                vec![(resize_load_idx, 0.0), (resize_load_idx, max_avg)],
                reference_style,
            ))?
            .label("~2/3 Load Factor")
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], reference_style));
    }

    for (method_idx, &method) in METHODS.iter().enumerate() {
        let color = &colors[method_idx % colors.len()];
        let line_style = ShapeStyle::from(color).stroke_width(line_width);

        chart
            .draw_series(LineSeries::new(
                (0..num_keys.len() - 1).map(|i| (i, average_probes[method_idx][i])),
                line_style,
            ))?
            .label(method)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series((0..num_keys.len() - 1).map(|i| {
            Circle::new((i, average_probes[method_idx][i]), marker_size, color.filled())
        }))?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    // Plot 2: Worst-case probing
    let root = BitMapBackend::new("worst_case_probes.png", (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_worst = worst_case_probes
        .iter()
        .flat_map(|v| v.iter())
        .fold(0, |max, &x| if x > max { x } else { max }) as f64 *
        1.1; // Add 10% margin

    let mut chart = ChartBuilder::on(&root)
        .caption("Worst-Case Probing by Strategy", (font_family, title_size))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .right_y_label_area_size(10)
        .build_cartesian_2d(0..(num_keys.len() - 1), 0.0..max_worst)?;

    chart
        .configure_mesh()
        .x_labels(num_keys.len() - 1)
        .x_label_formatter(&|x| {
            if *x < x_labels.len() { x_labels[*x].clone() } else { "".to_string() }
        })
        .x_desc("Number of Keys Inserted")
        .y_desc("Worst-Case Probe Count")
        .axis_desc_style((font_family, text_size))
        .draw()?;

    let threshold_style = ShapeStyle::from(&RED.mix(0.3)).stroke_width(1);
    chart
        .draw_series(LineSeries::new(
            vec![(0, MAX_PROBES as f64 / 2.0), (num_keys.len() - 1, MAX_PROBES as f64 / 2.0)],
            threshold_style,
        ))?
        .label("Warning Threshold")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], threshold_style));

    for (method_idx, &method) in METHODS.iter().enumerate() {
        let color = &colors[method_idx % colors.len()];
        let line_style = ShapeStyle::from(color).stroke_width(line_width);

        chart
            .draw_series(LineSeries::new(
                (0..num_keys.len() - 1).map(|i| (i, worst_case_probes[method_idx][i] as f64)),
                line_style,
            ))?
            .label(method)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series((0..num_keys.len() - 1).map(|i| {
            Circle::new((i, worst_case_probes[method_idx][i] as f64), marker_size, color.filled())
        }))?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    println!("Generated plot images: average_probe_length.png, worst_case_probes.png");

    Ok(())
}
