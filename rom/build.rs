use std::{env, fs::File, io::Write, path::Path};

fn main() {
    // Only run for the board's target
    let target = env::var("TARGET").unwrap();
    if !target.starts_with("riscv32") {
        println!("cargo:warning=Not targeting riscv32; skipping linker script generation.");
        return;
    }

    let out_dir = env::var("OUT_DIR").unwrap();
    let link_path = Path::new(&out_dir).join("dtekv.ld");
    let mut f = File::create(&link_path).expect("failed to create dtekv.ld");

    // The program is loaded over JTAG straight into SDRAM, so there is no
    // separate load address for .data.
    writeln!(f, "OUTPUT_ARCH(riscv)").unwrap();
    writeln!(f, "ENTRY(_start)").unwrap();
    writeln!(f, "MEMORY {{").unwrap();
    writeln!(f, "  RAM (rwx) : ORIGIN = 0x00000000, LENGTH = 0x02000000").unwrap();
    writeln!(f, "}}").unwrap();

    writeln!(f, "SECTIONS {{").unwrap();
    writeln!(f, "  .init : {{ KEEP(*(.init)) }} > RAM").unwrap();
    writeln!(f, "  .text : {{ *(.text .text.*) }} > RAM").unwrap();
    writeln!(f, "  .rodata : ALIGN(4) {{ *(.rodata .rodata.*) *(.srodata .srodata.*) }} > RAM").unwrap();
    writeln!(f, "  .data : ALIGN(4) {{ *(.data .data.*) *(.sdata .sdata.*) }} > RAM").unwrap();
    writeln!(f, "  .bss (NOLOAD) : ALIGN(4) {{").unwrap();
    writeln!(f, "    __bss_start = .;").unwrap();
    writeln!(f, "    *(.bss .bss.*) *(.sbss .sbss.*) *(COMMON)").unwrap();
    writeln!(f, "    . = ALIGN(4);").unwrap();
    writeln!(f, "    __bss_end = .;").unwrap();
    writeln!(f, "  }} > RAM").unwrap();
    writeln!(f, "  __stack_top = ORIGIN(RAM) + LENGTH(RAM);").unwrap();
    writeln!(f, "  /DISCARD/ : {{ *(.eh_frame .eh_frame_hdr) }}").unwrap();
    writeln!(f, "}}").unwrap();

    println!("cargo:rustc-link-search={}", out_dir);
    println!("cargo:rerun-if-changed=build.rs");
}
