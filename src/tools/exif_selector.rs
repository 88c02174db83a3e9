use crate::tools::date_key::ModifiedDateKey;
use crate::tools::file_selector::{DateFileSelector, FileSelector};
use anyhow::Result;
use chrono::NaiveDateTime;
use log::debug;
use std::ffi::OsString;
use std::fs;
use std::io::Read;
use std::path::Path;

/// EXIF 拍攝時間欄位的固定格式
const EXIF_DATETIME_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

/// 影像格式判斷時讀取的開頭位元組數
const SIGNATURE_PROBE_LEN: u64 = 32;

/// EXIF 拍攝日期檔案選擇器
///
/// 影像檔優先使用 EXIF 拍攝時間（`DateTimeOriginal`）產生分類鍵；
/// 非影像、影像無法開啟、缺少欄位或時間格式不正確時，
/// 一律回退到修改時間鍵。影像與否以檔案內容的簽名判斷，不看副檔名。
pub struct ExifDateFileSelector {
    fallback: DateFileSelector,
}

impl ExifDateFileSelector {
    #[must_use]
    pub fn new(strategy: &str) -> Self {
        Self {
            fallback: DateFileSelector::new(strategy),
        }
    }

    #[must_use]
    pub const fn key_strategy(&self) -> ModifiedDateKey {
        self.fallback.key_strategy()
    }
}

impl FileSelector for ExifDateFileSelector {
    fn files(&self, dir: &Path) -> Result<Vec<OsString>> {
        self.fallback.files(dir)
    }

    fn subdirectories(&self, dir: &Path) -> Result<Vec<OsString>> {
        self.fallback.subdirectories(dir)
    }

    fn generate_key(&self, file_path: &Path) -> Result<String> {
        if is_image_file(file_path) {
            if let Some(taken) = read_capture_datetime(file_path) {
                return Ok(self.key_strategy().format_naive(taken));
            }
            debug!(
                "影像缺少可用的 EXIF 拍攝時間，改用修改時間: {}",
                file_path.display()
            );
        }
        self.fallback.generate_key(file_path)
    }
}

/// 以檔案開頭的簽名判斷是否為影像
fn is_image_file(path: &Path) -> bool {
    let Ok(file) = fs::File::open(path) else {
        return false;
    };

    let mut header = Vec::with_capacity(SIGNATURE_PROBE_LEN as usize);
    if file.take(SIGNATURE_PROBE_LEN).read_to_end(&mut header).is_err() {
        return false;
    }

    image::guess_format(&header).is_ok()
}

/// 讀取影像的 EXIF 拍攝時間
///
/// 任一步驟失敗都回傳 `None`，由呼叫端回退到修改時間。
fn read_capture_datetime(path: &Path) -> Option<NaiveDateTime> {
    let file = fs::File::open(path).ok()?;
    let mut reader = std::io::BufReader::new(file);
    let exif = exif::Reader::new().read_from_container(&mut reader).ok()?;

    let field = exif.get_field(exif::Tag::DateTimeOriginal, exif::In::PRIMARY)?;
    let raw = match field.value {
        exif::Value::Ascii(ref components) => components.first()?,
        _ => return None,
    };

    let text = std::str::from_utf8(raw).ok()?;
    NaiveDateTime::parse_from_str(text.trim_end_matches('\0').trim(), EXIF_DATETIME_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    /// 最小可辨識的 JPEG（SOI + APP0 JFIF + EOI），不含任何 EXIF 區段
    const JPEG_WITHOUT_EXIF: &[u8] = &[
        0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00, 0x01, 0x01, 0x00, 0x00,
        0x01, 0x00, 0x01, 0x00, 0x00, 0xFF, 0xD9,
    ];

    /// 組出帶有 DateTimeOriginal 的最小 TIFF（little-endian）
    ///
    /// IFD0 只有一個指向 Exif 子 IFD 的項目，子 IFD 只有拍攝時間欄位。
    fn tiff_with_datetime_original(datetime: &str) -> Vec<u8> {
        assert_eq!(datetime.len(), 19);

        let mut buf = Vec::new();
        buf.extend_from_slice(b"II\x2a\x00");
        buf.extend_from_slice(&8u32.to_le_bytes());

        // IFD0: ExifIFDPointer -> offset 26
        buf.extend_from_slice(&1u16.to_le_bytes());
        buf.extend_from_slice(&0x8769u16.to_le_bytes());
        buf.extend_from_slice(&4u16.to_le_bytes());
        buf.extend_from_slice(&1u32.to_le_bytes());
        buf.extend_from_slice(&26u32.to_le_bytes());
        buf.extend_from_slice(&0u32.to_le_bytes());

        // Exif IFD: DateTimeOriginal (ASCII, 20 bytes) -> offset 44
        buf.extend_from_slice(&1u16.to_le_bytes());
        buf.extend_from_slice(&0x9003u16.to_le_bytes());
        buf.extend_from_slice(&2u16.to_le_bytes());
        buf.extend_from_slice(&20u32.to_le_bytes());
        buf.extend_from_slice(&44u32.to_le_bytes());
        buf.extend_from_slice(&0u32.to_le_bytes());

        buf.extend_from_slice(datetime.as_bytes());
        buf.push(0);
        buf
    }

    fn set_mtime(path: &Path, secs_since_epoch: u64) {
        let file = File::options().write(true).open(path).unwrap();
        file.set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs_since_epoch))
            .unwrap();
        file.sync_all().unwrap();
    }

    #[test]
    fn test_is_image_file_by_signature_not_extension() {
        let temp_dir = TempDir::new().unwrap();

        // 副檔名與內容不符：內容才算數
        let fake_image = temp_dir.path().join("not_really.jpg");
        fs::write(&fake_image, "just some text").unwrap();
        assert!(!is_image_file(&fake_image));

        let real_image = temp_dir.path().join("photo.dat");
        fs::write(&real_image, JPEG_WITHOUT_EXIF).unwrap();
        assert!(is_image_file(&real_image));
    }

    #[test]
    fn test_is_image_file_missing_or_empty() {
        let temp_dir = TempDir::new().unwrap();
        assert!(!is_image_file(&temp_dir.path().join("missing.png")));

        let empty = temp_dir.path().join("empty");
        fs::write(&empty, "").unwrap();
        assert!(!is_image_file(&empty));
    }

    #[test]
    fn test_capture_datetime_from_tiff() {
        let temp_dir = TempDir::new().unwrap();
        let image_path = temp_dir.path().join("shot.tif");
        fs::write(&image_path, tiff_with_datetime_original("2015:11:07 13:20:00")).unwrap();

        let taken = read_capture_datetime(&image_path).unwrap();
        assert_eq!(taken.format("%Y-%m-%d %H:%M:%S").to_string(), "2015-11-07 13:20:00");
    }

    #[test]
    fn test_generate_key_prefers_exif_capture_date() {
        let temp_dir = TempDir::new().unwrap();
        let image_path = temp_dir.path().join("holiday.bin");
        fs::write(&image_path, tiff_with_datetime_original("2015:11:07 13:20:00")).unwrap();
        // 修改時間設在另一年，確認沒有被採用
        set_mtime(&image_path, 1_600_000_000);

        let selector = ExifDateFileSelector::new("month");
        assert_eq!(selector.generate_key(&image_path).unwrap(), "2015-11");

        let selector = ExifDateFileSelector::new("year");
        assert_eq!(selector.generate_key(&image_path).unwrap(), "2015");
    }

    #[test]
    fn test_image_without_exif_falls_back_to_mtime() {
        let temp_dir = TempDir::new().unwrap();
        let image_path = temp_dir.path().join("plain.jpg");
        fs::write(&image_path, JPEG_WITHOUT_EXIF).unwrap();

        let selector = ExifDateFileSelector::new("day");
        let plain = DateFileSelector::new("day");
        assert_eq!(
            selector.generate_key(&image_path).unwrap(),
            plain.generate_key(&image_path).unwrap()
        );
    }

    #[test]
    fn test_non_image_falls_back_to_mtime() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("notes.txt");
        fs::write(&file_path, "nothing image-like here").unwrap();

        let selector = ExifDateFileSelector::new("day");
        let plain = DateFileSelector::new("day");
        assert_eq!(
            selector.generate_key(&file_path).unwrap(),
            plain.generate_key(&file_path).unwrap()
        );
    }

    #[test]
    fn test_bogus_exif_datetime_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        let image_path = temp_dir.path().join("broken.tif");
        fs::write(&image_path, tiff_with_datetime_original("2015:99:99 99:99:99")).unwrap();

        let selector = ExifDateFileSelector::new("day");
        let plain = DateFileSelector::new("day");
        assert_eq!(
            selector.generate_key(&image_path).unwrap(),
            plain.generate_key(&image_path).unwrap()
        );
    }
}
