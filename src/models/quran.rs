use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy)]
pub struct Surah {
    pub number: u16,
    pub name: &'static str,
    pub ayah_count: u16,
}

/// The 114 surahs with their ayah counts (Kufan numbering, as in the
/// standard Madani mushaf).
pub const SURAHS: &[Surah] = &[
    Surah { number: 1, name: "Al-Fatihah", ayah_count: 7 },
    Surah { number: 2, name: "Al-Baqarah", ayah_count: 286 },
    Surah { number: 3, name: "Aal Imran", ayah_count: 200 },
    Surah { number: 4, name: "An-Nisa", ayah_count: 176 },
    Surah { number: 5, name: "Al-Ma'idah", ayah_count: 120 },
    Surah { number: 6, name: "Al-An'am", ayah_count: 165 },
    Surah { number: 7, name: "Al-A'raf", ayah_count: 206 },
    Surah { number: 8, name: "Al-Anfal", ayah_count: 75 },
    Surah { number: 9, name: "At-Tawbah", ayah_count: 129 },
    Surah { number: 10, name: "Yunus", ayah_count: 109 },
    Surah { number: 11, name: "Hud", ayah_count: 123 },
    Surah { number: 12, name: "Yusuf", ayah_count: 111 },
    Surah { number: 13, name: "Ar-Ra'd", ayah_count: 43 },
    Surah { number: 14, name: "Ibrahim", ayah_count: 52 },
    Surah { number: 15, name: "Al-Hijr", ayah_count: 99 },
    Surah { number: 16, name: "An-Nahl", ayah_count: 128 },
    Surah { number: 17, name: "Al-Isra", ayah_count: 111 },
    Surah { number: 18, name: "Al-Kahf", ayah_count: 110 },
    Surah { number: 19, name: "Maryam", ayah_count: 98 },
    Surah { number: 20, name: "Ta-Ha", ayah_count: 135 },
    Surah { number: 21, name: "Al-Anbiya", ayah_count: 112 },
    Surah { number: 22, name: "Al-Hajj", ayah_count: 78 },
    Surah { number: 23, name: "Al-Mu'minun", ayah_count: 118 },
    Surah { number: 24, name: "An-Nur", ayah_count: 64 },
    Surah { number: 25, name: "Al-Furqan", ayah_count: 77 },
    Surah { number: 26, name: "Ash-Shu'ara", ayah_count: 227 },
    Surah { number: 27, name: "An-Naml", ayah_count: 93 },
    Surah { number: 28, name: "Al-Qasas", ayah_count: 88 },
    Surah { number: 29, name: "Al-Ankabut", ayah_count: 69 },
    Surah { number: 30, name: "Ar-Rum", ayah_count: 60 },
    Surah { number: 31, name: "Luqman", ayah_count: 34 },
    Surah { number: 32, name: "As-Sajdah", ayah_count: 30 },
    Surah { number: 33, name: "Al-Ahzab", ayah_count: 73 },
    Surah { number: 34, name: "Saba", ayah_count: 54 },
    Surah { number: 35, name: "Fatir", ayah_count: 45 },
    Surah { number: 36, name: "Ya-Sin", ayah_count: 83 },
    Surah { number: 37, name: "As-Saffat", ayah_count: 182 },
    Surah { number: 38, name: "Sad", ayah_count: 88 },
    Surah { number: 39, name: "Az-Zumar", ayah_count: 75 },
    Surah { number: 40, name: "Ghafir", ayah_count: 85 },
    Surah { number: 41, name: "Fussilat", ayah_count: 54 },
    Surah { number: 42, name: "Ash-Shura", ayah_count: 53 },
    Surah { number: 43, name: "Az-Zukhruf", ayah_count: 89 },
    Surah { number: 44, name: "Ad-Dukhan", ayah_count: 59 },
    Surah { number: 45, name: "Al-Jathiyah", ayah_count: 37 },
    Surah { number: 46, name: "Al-Ahqaf", ayah_count: 35 },
    Surah { number: 47, name: "Muhammad", ayah_count: 38 },
    Surah { number: 48, name: "Al-Fath", ayah_count: 29 },
    Surah { number: 49, name: "Al-Hujurat", ayah_count: 18 },
    Surah { number: 50, name: "Qaf", ayah_count: 45 },
    Surah { number: 51, name: "Adh-Dhariyat", ayah_count: 60 },
    Surah { number: 52, name: "At-Tur", ayah_count: 49 },
    Surah { number: 53, name: "An-Najm", ayah_count: 62 },
    Surah { number: 54, name: "Al-Qamar", ayah_count: 55 },
    Surah { number: 55, name: "Ar-Rahman", ayah_count: 78 },
    Surah { number: 56, name: "Al-Waqi'ah", ayah_count: 96 },
    Surah { number: 57, name: "Al-Hadid", ayah_count: 29 },
    Surah { number: 58, name: "Al-Mujadilah", ayah_count: 22 },
    Surah { number: 59, name: "Al-Hashr", ayah_count: 24 },
    Surah { number: 60, name: "Al-Mumtahanah", ayah_count: 13 },
    Surah { number: 61, name: "As-Saff", ayah_count: 14 },
    Surah { number: 62, name: "Al-Jumu'ah", ayah_count: 11 },
    Surah { number: 63, name: "Al-Munafiqun", ayah_count: 11 },
    Surah { number: 64, name: "At-Taghabun", ayah_count: 18 },
    Surah { number: 65, name: "At-Talaq", ayah_count: 12 },
    Surah { number: 66, name: "At-Tahrim", ayah_count: 12 },
    Surah { number: 67, name: "Al-Mulk", ayah_count: 30 },
    Surah { number: 68, name: "Al-Qalam", ayah_count: 52 },
    Surah { number: 69, name: "Al-Haqqah", ayah_count: 52 },
    Surah { number: 70, name: "Al-Ma'arij", ayah_count: 44 },
    Surah { number: 71, name: "Nuh", ayah_count: 28 },
    Surah { number: 72, name: "Al-Jinn", ayah_count: 28 },
    Surah { number: 73, name: "Al-Muzzammil", ayah_count: 20 },
    Surah { number: 74, name: "Al-Muddaththir", ayah_count: 56 },
    Surah { number: 75, name: "Al-Qiyamah", ayah_count: 40 },
    Surah { number: 76, name: "Al-Insan", ayah_count: 31 },
    Surah { number: 77, name: "Al-Mursalat", ayah_count: 50 },
    Surah { number: 78, name: "An-Naba", ayah_count: 40 },
    Surah { number: 79, name: "An-Nazi'at", ayah_count: 46 },
    Surah { number: 80, name: "Abasa", ayah_count: 42 },
    Surah { number: 81, name: "At-Takwir", ayah_count: 29 },
    Surah { number: 82, name: "Al-Infitar", ayah_count: 19 },
    Surah { number: 83, name: "Al-Mutaffifin", ayah_count: 36 },
    Surah { number: 84, name: "Al-Inshiqaq", ayah_count: 25 },
    Surah { number: 85, name: "Al-Buruj", ayah_count: 22 },
    Surah { number: 86, name: "At-Tariq", ayah_count: 17 },
    Surah { number: 87, name: "Al-A'la", ayah_count: 19 },
    Surah { number: 88, name: "Al-Ghashiyah", ayah_count: 26 },
    Surah { number: 89, name: "Al-Fajr", ayah_count: 30 },
    Surah { number: 90, name: "Al-Balad", ayah_count: 20 },
    Surah { number: 91, name: "Ash-Shams", ayah_count: 15 },
    Surah { number: 92, name: "Al-Layl", ayah_count: 21 },
    Surah { number: 93, name: "Ad-Duha", ayah_count: 11 },
    Surah { number: 94, name: "Ash-Sharh", ayah_count: 8 },
    Surah { number: 95, name: "At-Tin", ayah_count: 8 },
    Surah { number: 96, name: "Al-Alaq", ayah_count: 19 },
    Surah { number: 97, name: "Al-Qadr", ayah_count: 5 },
    Surah { number: 98, name: "Al-Bayyinah", ayah_count: 8 },
    Surah { number: 99, name: "Az-Zalzalah", ayah_count: 8 },
    Surah { number: 100, name: "Al-Adiyat", ayah_count: 11 },
    Surah { number: 101, name: "Al-Qari'ah", ayah_count: 11 },
    Surah { number: 102, name: "At-Takathur", ayah_count: 8 },
    Surah { number: 103, name: "Al-Asr", ayah_count: 3 },
    Surah { number: 104, name: "Al-Humazah", ayah_count: 9 },
    Surah { number: 105, name: "Al-Fil", ayah_count: 5 },
    Surah { number: 106, name: "Quraysh", ayah_count: 4 },
    Surah { number: 107, name: "Al-Ma'un", ayah_count: 7 },
    Surah { number: 108, name: "Al-Kawthar", ayah_count: 3 },
    Surah { number: 109, name: "Al-Kafirun", ayah_count: 6 },
    Surah { number: 110, name: "An-Nasr", ayah_count: 3 },
    Surah { number: 111, name: "Al-Masad", ayah_count: 5 },
    Surah { number: 112, name: "Al-Ikhlas", ayah_count: 4 },
    Surah { number: 113, name: "Al-Falaq", ayah_count: 5 },
    Surah { number: 114, name: "An-Nas", ayah_count: 6 },
];

pub fn surah(number: u16) -> Option<&'static Surah> {
    if (1..=114).contains(&number) {
        Some(&SURAHS[number as usize - 1])
    } else {
        None
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum BookmarkError {
    #[error("there is no surah {0}; the Quran has surahs 1-114")]
    UnknownSurah(u16),
    #[error("{name} (surah {surah}) has {max} ayahs, so ayah {ayah} does not exist")]
    AyahOutOfRange {
        surah: u16,
        name: &'static str,
        ayah: u16,
        max: u16,
    },
}

/// The single reading-position bookmark. Validated on construction so a
/// stored bookmark always points at a real ayah.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub surah: u16,
    pub ayah: u16,
}

impl Bookmark {
    pub fn new(surah_no: u16, ayah: u16) -> Result<Self, BookmarkError> {
        let s = surah(surah_no).ok_or(BookmarkError::UnknownSurah(surah_no))?;
        if ayah == 0 || ayah > s.ayah_count {
            return Err(BookmarkError::AyahOutOfRange {
                surah: surah_no,
                name: s.name,
                ayah,
                max: s.ayah_count,
            });
        }
        Ok(Bookmark { surah: surah_no, ayah })
    }

    /// Parse a "surah:ayah" reference like "2:255" or "18:10".
    pub fn parse(reference: &str) -> anyhow::Result<Self> {
        let (s, a) = reference
            .split_once(':')
            .ok_or_else(|| anyhow::anyhow!("Use the form surah:ayah, e.g. 2:255"))?;
        let surah_no: u16 = s
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("'{}' is not a surah number", s.trim()))?;
        let ayah: u16 = a
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("'{}' is not an ayah number", a.trim()))?;
        Ok(Bookmark::new(surah_no, ayah)?)
    }

    pub fn surah_name(&self) -> &'static str {
        // surah is validated on construction
        SURAHS[self.surah as usize - 1].name
    }
}

impl std::fmt::Display for Bookmark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}:{}", self.surah_name(), self.surah, self.ayah)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_complete() {
        assert_eq!(SURAHS.len(), 114);
        for (i, s) in SURAHS.iter().enumerate() {
            assert_eq!(s.number as usize, i + 1);
            assert!(s.ayah_count >= 3, "{} is too short", s.name);
        }
        // Total ayah count of the mushaf
        let total: u32 = SURAHS.iter().map(|s| s.ayah_count as u32).sum();
        assert_eq!(total, 6236);
    }

    #[test]
    fn accepts_ayat_al_kursi() {
        let b = Bookmark::new(2, 255).unwrap();
        assert_eq!(b.surah_name(), "Al-Baqarah");
        assert_eq!(b.to_string(), "Al-Baqarah 2:255");
    }

    #[test]
    fn rejects_unknown_surah() {
        assert_eq!(Bookmark::new(0, 1), Err(BookmarkError::UnknownSurah(0)));
        assert_eq!(Bookmark::new(115, 1), Err(BookmarkError::UnknownSurah(115)));
    }

    #[test]
    fn rejects_ayah_out_of_range() {
        assert!(matches!(
            Bookmark::new(1, 8),
            Err(BookmarkError::AyahOutOfRange { max: 7, .. })
        ));
        assert!(Bookmark::new(1, 0).is_err());
    }

    #[test]
    fn parses_references() {
        assert_eq!(Bookmark::parse("18:10").unwrap(), Bookmark { surah: 18, ayah: 10 });
        assert_eq!(Bookmark::parse(" 2 : 255 ").unwrap(), Bookmark { surah: 2, ayah: 255 });
        assert!(Bookmark::parse("255").is_err());
        assert!(Bookmark::parse("2:999").is_err());
        assert!(Bookmark::parse("x:y").is_err());
    }
}
