// Headless tracking demonstration: loads a tiny catalog, steps a
// deterministic clock from the element epoch and prints the position
// table once per simulated minute.
use sat_viz::prelude::{
    Config, Duration, FrameUpdater, NullScene, Registry, SimulationClock, SteppedClock,
};

// Public domain reference record.
const CATALOG: &str = "\
ISS (ZARYA)
1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927
2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537
";

fn main() {
    env_logger::init();

    let cfg = Config::default();

    let mut registry = Registry::new();
    let report = registry
        .load_from_text(CATALOG, cfg.gravity_model)
        .unwrap_or_else(|e| panic!("invalid catalog: {}", e));
    println!(
        "{} satellite(s) loaded, {} dropped",
        report.loaded,
        report.dropped.len()
    );

    for entry in registry.list_sorted_by_name() {
        println!("  [{}] {}", entry.index, entry.name);
    }

    // step from the element epoch, one simulated minute per frame
    let start = registry
        .get_by_index(0)
        .map(|entry| entry.state.epoch())
        .unwrap_or_default();
    let mut clock = SteppedClock::new(start, Duration::from_seconds(60.0));

    let mut updater = FrameUpdater::new(cfg);
    let mut scene = NullScene;

    for _ in 0..5 {
        let now = clock.tick();
        let samples = updater.tick(&registry, now);
        updater.push_to_scene(&mut scene, &samples);

        println!("t = {} ({} tracked)", now, samples.len());
        for row in updater.table_rows(&samples, now) {
            println!(
                "  {} ({}): xyz = ({:.0}, {:.0}, {:.0}) km, |v| = {:.0} km/s, lat = {:.3}, lon = {:.3}, h = {:.0} km",
                row.name,
                row.id,
                row.x_km,
                row.y_km,
                row.z_km,
                row.speed_km_s,
                row.latitude_deg,
                row.longitude_deg,
                row.height_km,
            );
        }
    }
}
