#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("folio renders in the browser. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    folio::frontend::run();
}
