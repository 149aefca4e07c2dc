use randselect::sort::select;

fn main() -> randselect::Result<()> {
    env_logger::init();

    let mut arr = [50, 70, 60, 90, 10, 30, 20, 40];
    let len = arr.len();

    println!(">>> Randomized Select <<<");

    let smallest = select(&mut arr, 1, len, 1)?;
    println!("Smallest: {}", smallest);

    let largest = select(&mut arr, 1, len, len)?;
    println!("Largest: {}", largest);

    Ok(())
}
