use pocketcore_common::error::Error;

use crate::{
    gb::{GameBoy, GameBoyMode},
    ppu::FRAME_BUFFER_SIZE,
    serial::NullDevice,
};

#[derive(Default)]
pub struct TestOptions {
    pub mode: Option<GameBoyMode>,
    pub ppu_enabled: Option<bool>,
    pub apu_enabled: Option<bool>,
    pub dma_enabled: Option<bool>,
    pub timer_enabled: Option<bool>,
    pub boot: Option<bool>,
}

pub fn build_test(options: TestOptions) -> Box<GameBoy> {
    let device = Box::<NullDevice>::default();
    let mut game_boy = Box::new(GameBoy::new(options.mode));
    game_boy.set_ppu_enabled(options.ppu_enabled.unwrap_or(true));
    game_boy.set_apu_enabled(options.apu_enabled.unwrap_or(true));
    game_boy.set_dma_enabled(options.dma_enabled.unwrap_or(true));
    game_boy.set_timer_enabled(options.timer_enabled.unwrap_or(true));
    game_boy.attach_serial(device);
    game_boy.load(options.boot.unwrap_or(false)).unwrap();
    game_boy
}

pub fn run_test(
    rom_path: &str,
    max_cycles: Option<u64>,
    options: TestOptions,
) -> Result<Box<GameBoy>, Error> {
    let max_cycles = max_cycles.unwrap_or(u64::MAX);
    let mut game_boy = build_test(options);
    game_boy.load_rom_file(rom_path, None)?;
    game_boy.clocks_cycles(max_cycles as usize);
    Ok(game_boy)
}

pub fn run_step_test(
    rom_path: &str,
    addr: u16,
    options: TestOptions,
) -> Result<Box<GameBoy>, Error> {
    let mut game_boy = build_test(options);
    game_boy.load_rom_file(rom_path, None)?;
    game_boy.step_to(addr);
    Ok(game_boy)
}

pub fn run_serial_test(
    rom_path: &str,
    max_cycles: Option<u64>,
    options: TestOptions,
) -> Result<(String, Box<GameBoy>), Error> {
    let mut game_boy = run_test(rom_path, max_cycles, options)?;
    Ok((game_boy.serial().device().state(), game_boy))
}

pub fn run_image_test(
    rom_path: &str,
    max_cycles: Option<u64>,
    options: TestOptions,
) -> Result<([u8; FRAME_BUFFER_SIZE], Box<GameBoy>), Error> {
    let mut game_boy = run_test(rom_path, max_cycles, options)?;
    Ok((*game_boy.frame_buffer(), game_boy))
}

#[cfg(test)]
mod tests {
    use crate::{
        consts::{
            BGP_ADDR, DIV_ADDR, DMA_ADDR, IF_ADDR, LCDC_ADDR, LYC_ADDR, LY_ADDR, OBP0_ADDR,
            OBP1_ADDR, SCX_ADDR, SCY_ADDR, STAT_ADDR, TAC_ADDR, TIMA_ADDR, TMA_ADDR, WX_ADDR,
            WY_ADDR,
        },
        gb::GameBoyMode,
        licensee::Licensee,
        rom::{Cartridge, RamSize, Region, RomSize, ROM_BANK_SIZE},
    };

    use super::{build_test, TestOptions};

    /// Builds an empty, header-only cartridge large enough to pass
    /// header validation, with the given old/new licensee codes baked
    /// in, and loads it into a freshly booted machine.
    fn boot_with_licensee(old_code: u8, new_code: &[u8; 2]) -> Box<crate::gb::GameBoy> {
        let mut data = vec![0u8; 2 * ROM_BANK_SIZE];
        data[0x0134..0x0134 + 4].copy_from_slice(b"TEST");
        data[0x0144] = new_code[0];
        data[0x0145] = new_code[1];
        data[0x0147] = 0x00; // ROM only
        data[0x0148] = 0x00; // 32 KiB
        data[0x0149] = 0x00; // no RAM
        data[0x014b] = old_code;

        let mut game_boy = build_test(TestOptions {
            boot: Some(true),
            ..Default::default()
        });
        let rom = Cartridge::from_data(&data).unwrap();
        game_boy.load_cartridge(rom).unwrap();
        game_boy
    }

    #[test]
    fn test_boot_state() {
        let result = build_test(TestOptions {
            boot: Some(true),
            ..Default::default()
        });

        assert_eq!(result.cpu_i().pc(), 0x0100);
        assert_eq!(result.cpu_i().sp(), 0xfffe);
        assert_eq!(result.cpu_i().af(), 0x01b0);
        assert_eq!(result.cpu_i().bc(), 0x0013);
        assert_eq!(result.cpu_i().de(), 0x00d8);
        assert_eq!(result.cpu_i().hl(), 0x014d);
        assert!(!result.cpu_i().ime());

        assert_eq!(result.mmu_i().read(DIV_ADDR), 0x00);
        assert_eq!(result.mmu_i().read(TIMA_ADDR), 0x00);
        assert_eq!(result.mmu_i().read(TMA_ADDR), 0x00);
        assert_eq!(result.mmu_i().read(TAC_ADDR), 0xf8);
        assert_eq!(result.mmu_i().read(IF_ADDR), 0xe0);

        assert_eq!(result.ppu_i().read(LCDC_ADDR), 0x91);
        assert_eq!(result.ppu_i().read(STAT_ADDR), 0x86);
        assert_eq!(result.ppu_i().read(SCY_ADDR), 0x00);
        assert_eq!(result.ppu_i().read(SCX_ADDR), 0x00);
        assert_eq!(result.ppu_i().read(LY_ADDR), 0x00);
        assert_eq!(result.ppu_i().read(LYC_ADDR), 0x00);
        assert_eq!(result.ppu_i().read(BGP_ADDR), 0x00);
        assert_eq!(result.ppu_i().read(OBP0_ADDR), 0x00);
        assert_eq!(result.ppu_i().read(OBP1_ADDR), 0x00);
        assert_eq!(result.ppu_i().read(WX_ADDR), 0x00);
        assert_eq!(result.ppu_i().read(WY_ADDR), 0x00);

        assert_eq!(result.ppu_i().read(DMA_ADDR), 0x00);
    }

    #[test]
    fn test_licensee_old_code() {
        let game_boy = boot_with_licensee(0x01, b"00");
        assert_eq!(game_boy.rom_i().gb_mode(), GameBoyMode::Dmg);
        assert_eq!(game_boy.rom_i().title().as_str(), "TEST");
        assert_eq!(game_boy.rom_i().licensee(), Licensee::Nintendo);
        assert_eq!(game_boy.rom_i().region(), Region::Unknown);
        assert_eq!(game_boy.rom_i().rom_size(), RomSize::Size32K);
        assert_eq!(game_boy.rom_i().ram_size(), RamSize::NoRam);
    }

    #[test]
    fn test_licensee_new_code() {
        let game_boy = boot_with_licensee(0x33, b"EA");
        assert_eq!(game_boy.rom_i().licensee(), Licensee::ElectronicArts);
    }
}
