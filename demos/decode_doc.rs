//! Decodes the ASCII art message hidden in an HTML table document and prints
//! it to stdout.
//!
//! Usage: `decode_doc <document.html>`

use std::env;

use artgrid::Doc;

fn main() {
    env_logger::init();

    let file = env::args()
        .nth(1)
        .expect("Please provide an html document to decode");

    let mut doc = Doc::open(&file).expect("Cannot open document");
    let message = doc.decode().expect("Cannot decode document");
    println!("{message}");
}
