use rand::Rng;
use rebin::*;

const TRIALS: usize = 500;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs()))
}

// a random partition with occasional repeated breakpoints, and signed totals
fn random_input(rng: &mut impl Rng) -> WeightedPartition {
    let intervals = rng.gen_range(1..50);
    let mut breaks = Vec::with_capacity(intervals + 1);
    let mut edge: f64 = rng.gen_range(-5.0..5.0);
    breaks.push(edge);

    for _ in 0..intervals {
        if rng.gen_bool(0.9) {
            edge += rng.gen_range(0.001..2.0);
        }
        breaks.push(edge);
    }

    // keep the extent positive
    if breaks[0] == breaks[intervals] {
        breaks[intervals] += 1.0;
    }

    let totals: Vec<f64> = (0..intervals).map(|_| rng.gen_range(-10.0..10.0)).collect();

    WeightedPartition::new(breaks, totals).unwrap()
}

fn rebinner(bins: usize, strategy: Strategy) -> Rebinner {
    Rebinner::builder(bins).strategy(strategy).build().unwrap()
}

#[test]
fn strategies_agree() {
    let mut rng = rand::thread_rng();

    for _ in 0..TRIALS {
        let input = random_input(&mut rng);
        let bins = rng.gen_range(1..64);

        let sweep = rebinner(bins, Strategy::Sweep).rebin(&input).unwrap();
        let exhaustive = rebinner(bins, Strategy::Exhaustive).rebin(&input).unwrap();

        assert_eq!(sweep, exhaustive);
    }
}

#[test]
// Intervals partly or wholly outside a fixed range must not derail the sweep
fn strategies_agree_with_fixed_range() {
    let mut rng = rand::thread_rng();

    for _ in 0..TRIALS {
        let input = random_input(&mut rng);
        let bins = rng.gen_range(1..64);
        let start = rng.gen_range(-10.0..10.0);
        let end = start + rng.gen_range(0.5..20.0);

        let [sweep, exhaustive] = [Strategy::Sweep, Strategy::Exhaustive].map(|strategy| {
            Rebinner::builder(bins)
                .range(start, end)
                .strategy(strategy)
                .build()
                .unwrap()
                .rebin(&input)
                .unwrap()
        });

        assert_eq!(sweep, exhaustive);
        assert!(approx_eq(sweep.total() + sweep.excluded(), input.total()));
    }
}

#[test]
fn conserves_mass() {
    let mut rng = rand::thread_rng();

    for _ in 0..TRIALS {
        let input = random_input(&mut rng);
        let bins = rng.gen_range(1..64);
        let histogram = Rebinner::new(bins).unwrap().rebin(&input).unwrap();

        // only zero-width intervals lose their mass
        let expected: f64 = input
            .iter()
            .filter(|(interval, _)| !interval.is_empty())
            .map(|(_, total)| total)
            .sum();
        assert!(approx_eq(histogram.total(), expected));
        assert!(approx_eq(histogram.total() + histogram.excluded(), input.total()));

        let from_densities: f64 = histogram
            .iter()
            .map(|bin| bin.density() * bin.range().len())
            .sum();
        assert!(approx_eq(from_densities, expected));
    }
}

#[test]
fn conserves_mass_with_fixed_range() {
    let mut rng = rand::thread_rng();

    for _ in 0..TRIALS {
        let input = random_input(&mut rng);
        let bins = rng.gen_range(1..64);
        let start = rng.gen_range(-10.0..10.0);
        let end = start + rng.gen_range(0.5..20.0);

        let histogram = Rebinner::builder(bins)
            .range(start, end)
            .build()
            .unwrap()
            .rebin(&input)
            .unwrap();

        assert!(approx_eq(histogram.total() + histogram.excluded(), input.total()));
    }
}

#[test]
fn linear_in_totals() {
    let mut rng = rand::thread_rng();

    for _ in 0..TRIALS {
        let x = random_input(&mut rng);
        let breaks = x.partition().breakpoints().to_vec();
        let y: Vec<f64> = x.totals().iter().map(|_| rng.gen_range(-10.0..10.0)).collect();
        let scale = rng.gen_range(-3.0..3.0);
        let combined: Vec<f64> = x
            .totals()
            .iter()
            .zip(y.iter())
            .map(|(a, b)| scale * a + b)
            .collect();

        let bins = rng.gen_range(1..64);
        let rebinner = Rebinner::new(bins).unwrap();
        let hx = rebinner.rebin(&x).unwrap();
        let hy = rebinner
            .rebin(&WeightedPartition::new(breaks.clone(), y).unwrap())
            .unwrap();
        let hc = rebinner
            .rebin(&WeightedPartition::new(breaks, combined).unwrap())
            .unwrap();

        for ((c, x), y) in hc.masses().iter().zip(hx.masses()).zip(hy.masses()) {
            assert!(approx_eq(*c, scale * x + y));
        }
    }
}

#[test]
fn density_weighting_matches_totals() {
    let mut rng = rand::thread_rng();

    for _ in 0..TRIALS {
        let densities = random_input(&mut rng);
        let bins = rng.gen_range(1..64);

        let totals: Vec<f64> = densities
            .iter()
            .map(|(interval, density)| density * interval.len())
            .collect();
        let masses = WeightedPartition::with_partition(densities.partition().clone(), totals).unwrap();

        let a = Rebinner::builder(bins)
            .weighting(Weighting::Density)
            .build()
            .unwrap()
            .rebin(&densities)
            .unwrap();
        let b = Rebinner::new(bins).unwrap().rebin(&masses).unwrap();

        assert_eq!(a.masses(), b.masses());
    }
}

#[test]
// Overlap is symmetric, non-negative, bounded by either length, and zero for
// disjoint intervals
fn overlap_properties() {
    let mut rng = rand::thread_rng();

    for _ in 0..TRIALS * 10 {
        let a = rng.gen_range(-10.0..10.0);
        let b = a + rng.gen_range(0.0..5.0);
        let c = rng.gen_range(-10.0..10.0);
        let d = c + rng.gen_range(0.0..5.0);

        let x = overlap((a, b), (c, d));
        assert_eq!(x, overlap((c, d), (a, b)));
        assert!(x >= 0.0);
        assert!(x <= b - a && x <= d - c);

        if b <= c || d <= a {
            assert_eq!(x, 0.0);
        }
        if a <= c && d <= b {
            assert_eq!(x, d - c);
        }
    }
}

#[test]
// Rebinning onto the partition's own uniform grid returns the input unchanged
fn identity() {
    let mut rng = rand::thread_rng();

    for bins in [1, 2, 4, 8, 16, 32] {
        let breaks: Vec<f64> = (0..=bins).map(|i| i as f64 / bins as f64).collect();
        let totals: Vec<f64> = (0..bins).map(|_| rng.gen_range(-10.0..10.0)).collect();
        let input = WeightedPartition::new(breaks, totals.clone()).unwrap();

        for strategy in [Strategy::Sweep, Strategy::Exhaustive] {
            let histogram = rebinner(bins, strategy).rebin(&input).unwrap();
            assert_eq!(histogram.masses(), &totals[..]);
        }
    }
}
