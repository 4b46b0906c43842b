//! Basic usage example for `MaybeOwning`.
//!
//! This example shows one handle type standing in for both owned and borrowed values, with
//! only the owned values being destroyed when the handles go away.

use std::ptr::NonNull;

use conditional_delete::{MaybeOwned, MaybeOwning};

struct Connection {
    name: &'static str,
}

impl Drop for Connection {
    fn drop(&mut self) {
        println!("Closing connection '{}'", self.name);
    }
}

fn describe(handle: &MaybeOwning<Connection>) {
    let ownership = if handle.owns() { "owns" } else { "borrows" };

    if let Some(connection) = handle.get() {
        println!("Handle {ownership} connection '{}'", connection.name);
    }
}

fn main() {
    // A connection owned by the application for its entire lifetime.
    let mut shared = Connection { name: "shared" };

    {
        let handles = vec![
            MaybeOwning::owning(Box::new(Connection { name: "dedicated" })),
            // SAFETY: `shared` outlives the handles and is not touched while they exist.
            unsafe { MaybeOwning::borrowing(NonNull::from(&mut shared)) },
        ];

        for handle in &handles {
            describe(handle);
        }

        println!("Dropping handles");
    }

    println!("Handles dropped, '{}' is still open", shared.name);

    // Where ownership is known statically, the borrow checker can do the bookkeeping instead.
    let borrowed = MaybeOwned::from(&shared);
    println!(
        "MaybeOwned view of '{}' owns it: {}",
        borrowed.name,
        borrowed.owns()
    );
}
