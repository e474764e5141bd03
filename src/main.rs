pub mod icon_gen;

fn main() {
    if let Err(err) = icon_gen::generate() {
        println!("Error: {}", err);
    }
}
