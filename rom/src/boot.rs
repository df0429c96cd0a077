use core::{
    arch::{asm, global_asm},
    panic::PanicInfo,
};

use dtekv::input::Switches;
use dtekv::interrupt::{Cause, Trap};
use dtekv::timer::Timer;

use crate::CLOCK;

#[panic_handler]
fn panic(info: &PanicInfo<'_>) -> ! {
    log::error!("{}", info);
    loop {}
}

const MSTATUS_MIE: u32 = 1 << 3;

/// One hart, so masking interrupts is enough to make a section indivisible.
struct SingleHart;

critical_section::set_impl!(SingleHart);

unsafe impl critical_section::Impl for SingleHart {
    unsafe fn acquire() -> critical_section::RawRestoreState {
        let mstatus: u32;
        unsafe { asm!("csrrci {0}, mstatus, 8", out(reg) mstatus) };
        mstatus & MSTATUS_MIE != 0
    }

    unsafe fn release(was_enabled: critical_section::RawRestoreState) {
        if was_enabled {
            unsafe { asm!("csrsi mstatus, 8") };
        }
    }
}

unsafe extern "C" {
    /// Unmasks the timer and switch interrupts and sets `mstatus.MIE`.
    pub unsafe fn enable_interrupts();
}

// Reset entry, `enable_interrupts` and the trap vector. The trap entry saves
// the caller-saved registers, hands `mcause` and `mepc` to `handle_trap` and
// returns with `mret`.
global_asm!(
    r#"
    .section .init, "ax"
    .global _start
_start:
    la sp, __stack_top
    la t0, __bss_start
    la t1, __bss_end
1:
    bgeu t0, t1, 2f
    sw zero, 0(t0)
    addi t0, t0, 4
    j 1b
2:
    la t0, trap_entry
    csrw mtvec, t0
    call main
3:
    j 3b

    .section .text
    .global enable_interrupts
enable_interrupts:
    li t0, 0x30000
    csrs mie, t0
    csrsi mstatus, 8
    ret

    .align 2
trap_entry:
    addi sp, sp, -64
    sw ra, 0(sp)
    sw t0, 4(sp)
    sw t1, 8(sp)
    sw t2, 12(sp)
    sw a0, 16(sp)
    sw a1, 20(sp)
    sw a2, 24(sp)
    sw a3, 28(sp)
    sw a4, 32(sp)
    sw a5, 36(sp)
    sw a6, 40(sp)
    sw a7, 44(sp)
    sw t3, 48(sp)
    sw t4, 52(sp)
    sw t5, 56(sp)
    sw t6, 60(sp)
    csrr a0, mcause
    csrr a1, mepc
    call handle_trap
    lw ra, 0(sp)
    lw t0, 4(sp)
    lw t1, 8(sp)
    lw t2, 12(sp)
    lw a0, 16(sp)
    lw a1, 20(sp)
    lw a2, 24(sp)
    lw a3, 28(sp)
    lw a4, 32(sp)
    lw a5, 36(sp)
    lw a6, 40(sp)
    lw a7, 44(sp)
    lw t3, 48(sp)
    lw t4, 52(sp)
    lw t5, 56(sp)
    lw t6, 60(sp)
    addi sp, sp, 64
    mret
"#
);

#[unsafe(no_mangle)]
extern "C" fn handle_trap(mcause: u32, mepc: u32) {
    match Trap::from_mcause(mcause) {
        Trap::Interrupt(cause) => handle_interrupt(cause),
        // returning would re-run the faulting instruction
        Trap::Exception(code) => panic!("exception {} at {:#010x}", code, mepc),
    }
}

/// Acknowledges the source, then touches nothing but the [`Clock`].
/// The main loop owns everything else.
///
/// [`Clock`]: snake_core::Clock
fn handle_interrupt(cause: u32) {
    match Cause::try_from(cause) {
        Ok(Cause::Timer) => {
            unsafe { Timer::acknowledge_raw() };
            CLOCK.on_timer();
        }
        Ok(Cause::Switches) => {
            unsafe { Switches::acknowledge_raw() };
            CLOCK.on_input_change();
        }
        // Nothing else is unmasked.
        Err(_) => {}
    }
}
