
//Raw block sizes
pub const RAW_BLOCK_SIZE_BYTES: usize = 123152;
pub const RAW_BLOCK_SIZE_WORDS: usize = RAW_BLOCK_SIZE_BYTES / 4;
pub const RAW_DATA_OFFSET_WORDS: usize = 1; //word 0 echoes the channel mask
pub const BITS_PER_REGISTER: usize = 16;

//SkiRoc register file layout
pub const REGISTERS_PER_CHIP: usize = 1924;
pub const TIME_SLICES: usize = 13;
pub const SLOTS_PER_SLICE: usize = 128;
pub const HIGH_GAIN_OFFSET: usize = 64;
pub const CHANNELS_PER_CHIP: usize = 64;
pub const TOA_FALL_BASE: usize = 1664;
pub const TOA_RISE_BASE: usize = TOA_FALL_BASE + 64;
pub const TOT_SLOW_BASE: usize = TOA_FALL_BASE + 128;
pub const TOT_FAST_BASE: usize = TOA_FALL_BASE + 192;
pub const ROLL_MASK_REGISTER: usize = 1920;
pub const GLOBAL_TIMESTAMP_BASE: usize = 1921;
pub const GLOBAL_TIMESTAMP_WORDS: usize = 3;

//ADC samples
pub const ADC_VALUE_MASK: u32 = 0x0FFF;
pub const ADC_OVERFLOW: u16 = 4096;

//Board and plane geometry
pub const SKIROCS_PER_BOARD: usize = 4;
pub const BOARDS_PER_BLOCK: usize = 1;
pub const PLANE_ROWS: u16 = 4;
pub const PLANE_COLUMNS: u16 = 64;
pub const PLANE_ID_BLOCK_STRIDE: u32 = 8;

//Zero suppressed hit records
pub const ZS_HIT_WORDS: usize = 17;
pub const ZS_SAMPLE_FIELDS: usize = ZS_HIT_WORDS - 1;
pub const PEDESTAL_SAMPLES: usize = CHANNELS_PER_CHIP / 2;

//Event stream
pub const EVENT_TYPE: &str = "HexaBoard";
pub const TRIGGER_ID_OFFSET: usize = 8;

//Calibration defaults for the current hardware revision; the config file can override them
pub const DEFAULT_SKIROC_MASK: u32 = 0x0000000F;
pub const DEFAULT_NOISE: u16 = 10;
pub const DEFAULT_ZS_THRESHOLD: u16 = 70;
pub const DEFAULT_MAIN_FRAME_OFFSET: u32 = 8;
pub const DISCONNECTED_CHIP: usize = 2;
pub const DISCONNECTED_CHANNEL: usize = 60;
