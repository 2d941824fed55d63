//! Declaring bound types once and converting them both ways.
//!
//! Run with: cargo run --example student

use docbind::{bind, bind_map, Bound, TextOptions};
use std::collections::HashMap;
use std::error::Error;

#[derive(Debug, Default, PartialEq)]
struct Pen {
    name: String,
    count: u32,
}

bind!(Pen { name, count });

#[derive(Debug, Default, PartialEq)]
struct HomeWork {
    name: String,
    finish: Vec<i32>,
}

// Short keys keep the document small.
bind_map!(HomeWork { "n" => name, "f" => finish });

#[derive(Debug, Default, PartialEq)]
struct Student {
    name: String,
    age: u8,
    pens: Vec<Pen>,
    homeworks: HashMap<u32, HomeWork>,
}

bind!(Student {
    name,
    age,
    homeworks,
    pens,
});

fn main() -> Result<(), Box<dyn Error>> {
    let mut student = Student {
        name: "Li Lei".to_string(),
        age: 12,
        ..Default::default()
    };
    student.pens.push(Pen {
        name: "fountain".to_string(),
        count: 2,
    });
    student.homeworks.insert(
        3,
        HomeWork {
            name: "geometry".to_string(),
            finish: vec![1, 2, 4],
        },
    );

    println!("Compact:");
    println!("{}\n", student.to_text(None)?);

    println!("Indented by 2:");
    let text = student.to_text_with_options(&TextOptions::new().with_indent(2))?;
    println!("{}\n", text);

    let mut back = Student::default();
    back.from_text(&text)?;
    assert_eq!(back, student);

    let bytes = student.to_binary()?;
    println!(
        "Binary: {} bytes (text: {} bytes)",
        bytes.len(),
        student.to_text(None)?.len()
    );
    let mut back = Student::default();
    back.from_binary(&bytes)?;
    assert_eq!(back, student);

    // Partial documents only touch the keys they carry.
    student.from_text(r#"{"age": 13}"#)?;
    println!("After birthday: {} is {}", student.name, student.age);

    match student.from_text(r#"{"pens": [{"count": "lots"}]}"#) {
        Ok(()) => println!("unexpectedly accepted"),
        Err(e) => println!("Rejected: {}", e),
    }

    Ok(())
}
