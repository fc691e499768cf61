use bytering::RingBuffer;
use rand::Rng;

const SAMPLE_RATE: usize = 16_000;
const SAMPLE_WIDTH: usize = 2;

fn generate_chunk(rng: &mut impl Rng) -> Vec<i16> {
    let samples = rng.gen_range(80..1_600);
    (0..samples).map(|_| rng.gen()).collect()
}

fn main() -> Result<(), bytering::RingBufferError> {
    // Keep the last second of 16 kHz mono audio.
    let mut tail = RingBuffer::new(SAMPLE_RATE * SAMPLE_WIDTH)?;
    let mut rng = rand::thread_rng();
    let mut written = 0;

    for counter in 0..200 {
        let chunk = generate_chunk(&mut rng);
        written += chunk.len() * SAMPLE_WIDTH;
        tail.put_samples(&chunk);

        if counter % 50 == 0 {
            println!(
                "chunk {} : {} bytes written, {} retained, position {}",
                counter,
                written,
                tail.len(),
                tail.position()
            );
        }
    }

    let audio = tail.getvalue();
    println!(
        "retained {:.2}s of audio ({} bytes)",
        audio.len() as f32 / (SAMPLE_RATE * SAMPLE_WIDTH) as f32,
        audio.len()
    );

    tail.clear();
    println!("after clear : {:?}", tail);
    Ok(())
}
