//! Basic usage example for mutf8
//!
//! Run with: cargo run --example basic_usage

use mutf8::handle::Name;
use mutf8::*;

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> mutf8::Result<()> {
    println!("mutf8 Basic Usage Example");
    println!("=========================");

    // Example 1: ASCII passes through unchanged
    println!("\n1. ASCII Text:");
    {
        let text: Vec<u16> = "java/lang/String".encode_utf16().collect();
        let bytes = encode(&text, Terminator::None);

        println!("  Encoded {} units into {} bytes", text.len(), bytes.len());
        println!("  Bytes: {}", hex(&bytes));
    }

    // Example 2: NUL and supplementary characters
    println!("\n2. NUL and Supplementary Characters:");
    {
        let text: Vec<u16> = "a\u{0}\u{1F600}".encode_utf16().collect();
        let bytes = encode(&text, Terminator::None);

        println!("  Units: {:04X?}", text);
        println!("  Bytes: {}", hex(&bytes));
        println!("  Standard UTF-8 would be: {}", hex("a\u{0}\u{1F600}".as_bytes()));

        let decoded = decode(&bytes)?;
        println!("  Roundtrip ok: {}", decoded == text);
    }

    // Example 3: C-style terminator
    println!("\n3. Terminated Output:");
    {
        let bytes = encode_str("main", Terminator::Nul);
        println!("  Bytes: {} (length {})", hex(&bytes), bytes.len());
    }

    // Example 4: Writing into a caller-owned buffer
    println!("\n4. Allocation-Free Encoding:");
    {
        let text: Vec<u16> = "\u{4E2D}\u{6587}".encode_utf16().collect();
        let mut buf = [0u8; 8];
        let size = encode_into(&text, &mut buf, Terminator::None)?;
        println!("  Wrote {} bytes: {}", size, hex(&buf[..size]));

        let mut tiny = [0u8; 2];
        match encode_into(&text, &mut tiny, Terminator::None) {
            Err(e) => println!("  Tiny buffer rejected: {}", e),
            Ok(n) => println!("  Unexpectedly wrote {} bytes", n),
        }
    }

    // Example 5: Malformed input
    println!("\n5. Error Handling:");
    {
        let samples: [&[u8]; 3] = [&[0xE0, 0xA0], &[0xC2, 0x00], &[0xF0, 0x9F, 0x98, 0x80]];
        for bytes in samples {
            match decode(bytes) {
                Ok(units) => println!("  {} -> {:04X?}", hex(bytes), units),
                Err(e) => println!("  {} -> error: {} (offset {:?})", hex(bytes), e, e.offset()),
            }
        }
    }

    // Example 6: Typed byte strings
    println!("\n6. Typed Byte Strings:");
    {
        let text: Vec<u16> = "<init>".encode_utf16().collect();
        let name: ByteString<Name> = encode_to_handle(&text);
        println!("  Name handle: {:?} ({} bytes)", name, name.len());
        println!("  Decoded: {}", decode_to_string(&name)?);
    }

    println!("\nAll examples completed successfully!");
    Ok(())
}
