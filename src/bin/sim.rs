use seabattle::{simulate, GameConfig};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [board-size]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let config = match args.get(2) {
        Some(size) => GameConfig::new(size.parse()?)?,
        None => GameConfig::default(),
    };

    let summary = simulate(config, seed)?;
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
