use std::env;
use winres::WindowsResource;

fn main() {
    if env::var("CARGO_CFG_TARGET_OS").as_deref() != Ok("windows") {
        return;
    }

    let mut res = WindowsResource::new();
    res.set("FileDescription", "File Converter");
    res.set("ProductName", "File Converter");
    res.compile().expect("Unable to embed version resources.");
}
