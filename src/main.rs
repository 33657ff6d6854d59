#[cfg(not(target_family = "wasm"))]
fn main() {
    env_logger::init();
    solar_orrery::run();
}

#[cfg(target_family = "wasm")]
#[allow(dead_code)]
fn main() {
    unreachable!();
}
