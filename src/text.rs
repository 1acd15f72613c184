use crate::config::Language;
use crate::data::aggregate::DayTypeComparison;
use crate::data::model::DayCategory;
use crate::data::summary::Notice;

// ---------------------------------------------------------------------------
// Number formatting
// ---------------------------------------------------------------------------

/// `1234567` → `"1,234,567"`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Rounded to a whole number, with separators.
pub fn format_mean(value: f64) -> String {
    format_count(value.round().max(0.0) as u64)
}

// ---------------------------------------------------------------------------
// Display text
// ---------------------------------------------------------------------------

/// All user-visible wording. Category labels (Spring, Weekday, ...) are
/// data and are not translated.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayText {
    pub language: Language,
    pub window_title: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub welcome: &'static str,
    pub footer: &'static str,

    pub filters_heading: &'static str,
    pub year_label: &'static str,
    pub season_label: &'static str,
    pub day_type_label: &'static str,
    pub all_option: &'static str,
    pub export_button: &'static str,
    pub reset_button: &'static str,

    pub metrics_heading: &'static str,
    pub total_label: &'static str,
    pub mean_label: &'static str,
    pub peak_label: &'static str,
    pub no_data: &'static str,

    pub rentals_axis: &'static str,
    pub hourly_heading: &'static str,
    pub hour_axis: &'static str,
    pub season_heading: &'static str,
    pub season_axis: &'static str,
    pub month_heading: &'static str,
    pub weather_heading: &'static str,
    pub humidity_heading: &'static str,
    pub riders_heading: &'static str,
    pub casual_label: &'static str,
    pub registered_label: &'static str,
    pub rows_heading: &'static str,
    /// Date, season, weather, humidity, temperature, rentals.
    pub table_columns: [&'static str; 6],

    pub day_type_question: &'static str,
    pub day_type_description: &'static str,
    pub day_type_chart_title: &'static str,
    pub day_type_axis: &'static str,

    pub temperature_question: &'static str,
    pub temperature_description: &'static str,
    pub temperature_chart_title: &'static str,
    pub temperature_axis: &'static str,
}

impl DisplayText {
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::English => Self::english(),
            Language::Indonesian => Self::indonesian(),
        }
    }

    pub fn english() -> Self {
        Self {
            language: Language::English,
            window_title: "Bike Sharing Dashboard",
            title: "🚲 Bike Sharing Dashboard",
            subtitle: "Bike rental activity by time, season, weather and conditions.",
            welcome: "This dashboard analyses bike rental patterns across time, season, \
                      weather and environmental conditions. Use the filters on the left to explore.",
            footer: "Bike Sharing Dashboard",

            filters_heading: "🔍 Filters",
            year_label: "Year",
            season_label: "Season",
            day_type_label: "Day type",
            all_option: "All",
            export_button: "Export summary…",
            reset_button: "Reset filters",

            metrics_heading: "📊 Key metrics",
            total_label: "Total rentals",
            mean_label: "Average rentals per day",
            peak_label: "Busiest day",
            no_data: "No data",

            rentals_axis: "Rentals",
            hourly_heading: "Rentals by hour",
            hour_axis: "Hour",
            season_heading: "Rentals by season",
            season_axis: "Season",
            month_heading: "Rentals by month",
            weather_heading: "Rentals by weather",
            humidity_heading: "Rentals by humidity",
            riders_heading: "Casual vs registered riders",
            casual_label: "Casual",
            registered_label: "Registered",
            rows_heading: "Filtered days",
            table_columns: ["Date", "Season", "Weather", "Humidity", "Temperature", "Rentals"],

            day_type_question: "📌 How do rentals compare between weekdays and weekends?",
            day_type_description: "Comparing weekday and weekend totals shows whether bikes \
                                   are used more for commuting or for leisure.",
            day_type_chart_title: "Rentals on weekdays and weekends",
            day_type_axis: "Day type",

            temperature_question: "📌 How does temperature affect the number of rentals?",
            temperature_description: "Air temperature can influence whether people decide to \
                                      rent a bike. The chart plots temperature against rentals.",
            temperature_chart_title: "Temperature vs rentals",
            temperature_axis: "Temperature (normalized)",
        }
    }

    pub fn indonesian() -> Self {
        Self {
            language: Language::Indonesian,
            window_title: "Dashboard Penyewaan Sepeda",
            title: "🚲 Dashboard Penyewaan Sepeda",
            subtitle: "Analisis data penyewaan sepeda berdasarkan berbagai faktor.",
            welcome: "Dashboard ini dirancang untuk menganalisis pola penyewaan sepeda berdasarkan \
                      waktu, musim, cuaca, dan kondisi lingkungan. Mari eksplorasi data bersama-sama!",
            footer: "Dashboard Penyewaan Sepeda",

            filters_heading: "🔍 Filter Data",
            year_label: "Pilih Tahun",
            season_label: "Pilih Musim",
            day_type_label: "Pilih Tipe Hari",
            all_option: "Semua",
            export_button: "Ekspor ringkasan…",
            reset_button: "Atur ulang filter",

            metrics_heading: "📊 Metrik Utama",
            total_label: "Total Penyewaan",
            mean_label: "Rata-rata Penyewaan per Hari",
            peak_label: "Penyewaan Tertinggi",
            no_data: "Tidak ada data",

            rentals_axis: "Jumlah Penyewaan",
            hourly_heading: "Jumlah Penyewaan Berdasarkan Jam",
            hour_axis: "Jam",
            season_heading: "Jumlah Penyewaan Berdasarkan Musim",
            season_axis: "Musim",
            month_heading: "Jumlah Penyewaan Berdasarkan Bulan",
            weather_heading: "Jumlah Penyewaan Berdasarkan Cuaca",
            humidity_heading: "Jumlah Penyewaan Berdasarkan Kelembaban",
            riders_heading: "Penyewa Kasual vs Terdaftar",
            casual_label: "Kasual",
            registered_label: "Terdaftar",
            rows_heading: "Data Harian Terfilter",
            table_columns: ["Tanggal", "Musim", "Cuaca", "Kelembaban", "Suhu", "Penyewaan"],

            day_type_question: "📌 Bagaimana perbandingan penyewaan sepeda antara hari kerja dan akhir pekan?",
            day_type_description: "Perbandingan ini menunjukkan apakah sepeda lebih banyak digunakan \
                                   untuk keperluan transportasi atau rekreasi.",
            day_type_chart_title: "Penyewaan Sepeda Berdasarkan Hari Kerja dan Akhir Pekan",
            day_type_axis: "Kategori Hari",

            temperature_question: "📌 Bagaimana pengaruh suhu terhadap jumlah penyewaan sepeda?",
            temperature_description: "Suhu udara dapat mempengaruhi keputusan seseorang untuk \
                                      menyewa sepeda. Grafik berikut menunjukkan hubungan keduanya.",
            temperature_chart_title: "Pengaruh Suhu terhadap Penyewaan Sepeda",
            temperature_axis: "Suhu (Normalized)",
        }
    }

    /// Conclusion under the weekday/weekend chart.
    pub fn day_type_conclusion(&self, comparison: &DayTypeComparison) -> String {
        use DayTypeComparison::*;
        match (self.language, *comparison) {
            (Language::English, WeekdayHigher { weekday, weekend }) => format!(
                "✅ Rentals are higher on weekdays ({}) than on weekends ({}). \
                 Bikes are mostly used for everyday transport such as commuting.",
                format_count(weekday),
                format_count(weekend)
            ),
            (Language::English, WeekendHigher { weekday, weekend }) => format!(
                "✅ Rentals are higher on weekends ({}) than on weekdays ({}). \
                 Bikes are used more for recreation and leisure.",
                format_count(weekend),
                format_count(weekday)
            ),
            (Language::English, Equal { rentals }) => format!(
                "✅ Weekdays and weekends have the same number of rentals ({}).",
                format_count(rentals)
            ),
            (Language::English, OnlyWeekday { weekday }) => format!(
                "ℹ Only weekdays are selected ({} rentals); there are no weekend days to compare.",
                format_count(weekday)
            ),
            (Language::English, OnlyWeekend { weekend }) => format!(
                "ℹ Only weekends are selected ({} rentals); there are no weekdays to compare.",
                format_count(weekend)
            ),
            (Language::English, NoData) => {
                "ℹ No rentals match the current filters.".to_string()
            }

            (Language::Indonesian, WeekdayHigher { weekday, weekend }) => format!(
                "✅ Penyewaan sepeda lebih tinggi pada hari kerja ({}) dibandingkan akhir pekan ({}). \
                 Sepeda banyak digunakan untuk keperluan transportasi sehari-hari.",
                format_count(weekday),
                format_count(weekend)
            ),
            (Language::Indonesian, WeekendHigher { weekday, weekend }) => format!(
                "✅ Penyewaan sepeda lebih tinggi pada akhir pekan ({}) dibandingkan hari kerja ({}). \
                 Sepeda lebih sering digunakan untuk rekreasi.",
                format_count(weekend),
                format_count(weekday)
            ),
            (Language::Indonesian, Equal { rentals }) => format!(
                "✅ Jumlah penyewaan pada hari kerja dan akhir pekan sama ({}).",
                format_count(rentals)
            ),
            (Language::Indonesian, OnlyWeekday { weekday }) => format!(
                "ℹ Hanya hari kerja yang dipilih ({} penyewaan); tidak ada akhir pekan untuk dibandingkan.",
                format_count(weekday)
            ),
            (Language::Indonesian, OnlyWeekend { weekend }) => format!(
                "ℹ Hanya akhir pekan yang dipilih ({} penyewaan); tidak ada hari kerja untuk dibandingkan.",
                format_count(weekend)
            ),
            (Language::Indonesian, NoData) => {
                "ℹ Tidak ada data yang sesuai dengan filter.".to_string()
            }
        }
    }

    /// Conclusion under the temperature scatter chart.
    pub fn temperature_conclusion(&self, correlation: Option<f64>) -> String {
        let Some(r) = correlation else {
            return match self.language {
                Language::English => {
                    "ℹ Correlation is undefined for the current selection.".to_string()
                }
                Language::Indonesian => {
                    "ℹ Korelasi tidak dapat dihitung untuk pilihan ini.".to_string()
                }
            };
        };
        // Sign of the coefficient as printed.
        let shown = (r * 100.0).round();
        match (self.language, r) {
            (Language::English, r) if shown > 0.0 => format!(
                "✅ Temperature and rentals are positively correlated (coefficient {r:.2}). \
                 Warmer weather encourages cycling."
            ),
            (Language::English, r) if shown < 0.0 => format!(
                "✅ Temperature and rentals are negatively correlated (coefficient {r:.2}). \
                 Rentals fall as it gets warmer."
            ),
            (Language::English, _) => {
                "✅ Temperature and rentals are uncorrelated (coefficient 0.00).".to_string()
            }
            (Language::Indonesian, r) if shown > 0.0 => format!(
                "✅ Terdapat korelasi positif antara suhu dan jumlah penyewaan (koefisien {r:.2}). \
                 Cuaca yang hangat mendorong orang untuk bersepeda."
            ),
            (Language::Indonesian, r) if shown < 0.0 => format!(
                "✅ Terdapat korelasi negatif antara suhu dan jumlah penyewaan (koefisien {r:.2})."
            ),
            (Language::Indonesian, _) => {
                "✅ Tidak ada korelasi antara suhu dan jumlah penyewaan (koefisien 0.00).".to_string()
            }
        }
    }

    pub fn notice(&self, notice: Notice) -> String {
        match (self.language, notice) {
            (Language::English, Notice::EmptyResult) => {
                "No rows match the selected filters.".to_string()
            }
            (Language::Indonesian, Notice::EmptyResult) => {
                "Tidak ada data yang sesuai dengan filter.".to_string()
            }
            (Language::English, Notice::SingleBucket(category)) => {
                format!("Only {category} rows are selected.")
            }
            (Language::Indonesian, Notice::SingleBucket(category)) => {
                let name = match category {
                    DayCategory::Weekday => "hari kerja",
                    DayCategory::Weekend => "akhir pekan",
                };
                format!("Hanya data {name} yang dipilih.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_get_thousands_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(3292679), "3,292,679");
        assert_eq!(format_mean(4504.35), "4,504");
    }

    #[test]
    fn weekend_branch_names_weekend_first() {
        let text = DisplayText::english();
        let s = text.day_type_conclusion(&DayTypeComparison::WeekendHigher {
            weekday: 100,
            weekend: 120,
        });
        assert!(s.contains("higher on weekends (120)"));
        assert!(s.contains("weekdays (100)"));
    }

    #[test]
    fn single_bucket_has_its_own_wording() {
        let text = DisplayText::indonesian();
        let s = text.day_type_conclusion(&DayTypeComparison::OnlyWeekend { weekend: 1500 });
        assert!(s.contains("1,500"));
        assert!(s.contains("Hanya akhir pekan"));
    }

    #[test]
    fn correlation_conclusion_branches_on_sign() {
        let text = DisplayText::english();
        assert!(text.temperature_conclusion(Some(0.627)).contains("positively correlated (coefficient 0.63)"));
        assert!(text.temperature_conclusion(Some(-0.5)).contains("negatively"));
        assert!(text.temperature_conclusion(None).contains("undefined"));
    }

    #[test]
    fn correlation_that_rounds_to_zero_reads_as_uncorrelated() {
        let text = DisplayText::english();
        let tiny = text.temperature_conclusion(Some(0.001));
        assert!(tiny.contains("uncorrelated (coefficient 0.00)"), "{tiny}");
        let tiny_negative = text.temperature_conclusion(Some(-0.004));
        assert!(tiny_negative.contains("uncorrelated (coefficient 0.00)"), "{tiny_negative}");
        assert!(!tiny_negative.contains("-0.00"));
        assert!(text.temperature_conclusion(Some(0.006)).contains("positively correlated (coefficient 0.01)"));
    }

    #[test]
    fn presets_follow_language() {
        assert_eq!(DisplayText::for_language(Language::Indonesian).all_option, "Semua");
        assert_eq!(DisplayText::for_language(Language::English).all_option, "All");
    }
}
