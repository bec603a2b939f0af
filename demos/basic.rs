use stockbook::{Inventory, DEFAULT_PATH};

fn main() -> Result<(), stockbook::Error> {
    let mut inv = Inventory::new();
    let mut logs: Vec<String> = Vec::new();

    inv.add_logged("apple", 10, &mut logs)?;
    inv.add_logged("banana", 2, &mut logs)?;

    inv.remove("apple", 3)?;
    inv.remove("orange", 1)?; // no-op; orange not present

    println!("Apple stock: {}", inv.quantity("apple")?);
    println!("Low items: {:?}", inv.check_low(5));

    inv.save(DEFAULT_PATH)?;
    inv.report_to(&mut std::io::stdout())?;

    for line in &logs {
        println!("{line}");
    }
    Ok(())
}
