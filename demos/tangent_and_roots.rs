use polyroot::{
    analysis::{Analysis, AnalysisOptions},
    error::Error,
    function,
    roots::{try_newton_raphson, NewtonOptions, ScanOptions},
};

fn main() -> Result<(), Error> {
    //
    // Start from a cubic with roots at -1, 0.5 and 3
    function!(f(x) = 1 x^3 - 2.5 x^2 - 2 x + 1.5);
    let analysis = Analysis::new(f);
    println!("f(x)  = {}", analysis.expression());
    println!("f'(x) = {}\n", analysis.derivative_expression());

    //
    // Value, slope and tangent line at a point of interest
    let at = analysis.at(2.0);
    let (x, y) = at.point();
    println!("P({x}, {y}), slope {}", at.slope);
    println!("Tangent: {}\n", at.tangent());

    // A front end would plot these two series together
    let options = AnalysisOptions::default();
    let curve = analysis.curve(2.0, &options);
    let line = at.tangent().sample(&options);
    println!(
        "Sampled {} curve points and {} tangent points over {:?}\n",
        curve.len(),
        line.len(),
        options.window(2.0)
    );

    //
    // Every root on [-10, 10], in the order the scan met them
    let roots = analysis.roots(-10.0..=10.0, &ScanOptions::default());
    println!("Roots on [-10, 10]:");
    for root in &roots {
        println!("  x = {root:.6}");
    }

    //
    // A single run tells us why it failed, if it does
    let newton = NewtonOptions::new(1e-10, 50)?;
    let critical = (5.0 - f64::sqrt(49.0)) / 6.0; // f'(x) = 0 here
    match try_newton_raphson(analysis.function(), critical, &newton) {
        Ok(c) => println!("\nFrom x0 = {critical}: root {} after {} iterations", c.root, c.iterations),
        Err(e) => println!("\nFrom x0 = {critical}: {e}"),
    }

    let c = try_newton_raphson(analysis.function(), 10.0, &newton)?;
    println!("From x0 = 10: root {} after {} iterations", c.root, c.iterations);

    Ok(())
}
