//! Static gazetteer of known birth places.
//!
//! Keys are lowercase place names. Declaration order matters: partial
//! matching in the resolver scans this table front to back and the first
//! hit wins.

use crate::GeoPoint;

/// One named place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GazetteerEntry {
    /// Lowercase place name.
    pub key: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    /// IANA time-zone id. Informational only.
    pub timezone: &'static str,
}

impl GazetteerEntry {
    pub const fn point(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

const fn entry(
    key: &'static str,
    latitude: f64,
    longitude: f64,
    timezone: &'static str,
) -> GazetteerEntry {
    GazetteerEntry {
        key,
        latitude,
        longitude,
        timezone,
    }
}

/// All known places, Indian cities first.
pub static GAZETTEER: &[GazetteerEntry] = &[
    entry("delhi", 28.6139, 77.209, "Asia/Kolkata"),
    entry("mumbai", 19.076, 72.8777, "Asia/Kolkata"),
    entry("bangalore", 12.9716, 77.5946, "Asia/Kolkata"),
    entry("chennai", 13.0827, 80.2707, "Asia/Kolkata"),
    entry("kolkata", 22.5726, 88.3639, "Asia/Kolkata"),
    entry("hyderabad", 17.385, 78.4867, "Asia/Kolkata"),
    entry("pune", 18.5204, 73.8567, "Asia/Kolkata"),
    entry("ahmedabad", 23.0225, 72.5714, "Asia/Kolkata"),
    entry("jaipur", 26.9124, 75.7873, "Asia/Kolkata"),
    entry("lucknow", 26.8467, 80.9462, "Asia/Kolkata"),
    entry("kanpur", 26.4499, 80.3319, "Asia/Kolkata"),
    entry("nagpur", 21.1458, 79.0882, "Asia/Kolkata"),
    entry("indore", 22.7196, 75.8577, "Asia/Kolkata"),
    entry("thane", 19.2183, 72.9781, "Asia/Kolkata"),
    entry("bhopal", 23.2599, 77.4126, "Asia/Kolkata"),
    entry("visakhapatnam", 17.6868, 83.2185, "Asia/Kolkata"),
    entry("pimpri", 18.6298, 73.7997, "Asia/Kolkata"),
    entry("patna", 25.5941, 85.1376, "Asia/Kolkata"),
    entry("vadodara", 22.3072, 73.1812, "Asia/Kolkata"),
    entry("ghaziabad", 28.6692, 77.4538, "Asia/Kolkata"),
    entry("ludhiana", 30.901, 75.8573, "Asia/Kolkata"),
    entry("agra", 27.1767, 78.0081, "Asia/Kolkata"),
    entry("nashik", 19.9975, 73.7898, "Asia/Kolkata"),
    entry("faridabad", 28.4089, 77.3178, "Asia/Kolkata"),
    entry("meerut", 28.9845, 77.7064, "Asia/Kolkata"),
    entry("rajkot", 22.3039, 70.8022, "Asia/Kolkata"),
    entry("kalyan", 19.2437, 73.1355, "Asia/Kolkata"),
    entry("vasai", 19.4912, 72.8054, "Asia/Kolkata"),
    entry("varanasi", 25.3176, 82.9739, "Asia/Kolkata"),
    entry("srinagar", 34.0837, 74.7973, "Asia/Kolkata"),
    entry("aurangabad", 19.8762, 75.3433, "Asia/Kolkata"),
    entry("dhanbad", 23.7957, 86.4304, "Asia/Kolkata"),
    entry("amritsar", 31.634, 74.8723, "Asia/Kolkata"),
    entry("navi mumbai", 19.033, 73.0297, "Asia/Kolkata"),
    entry("allahabad", 25.4358, 81.8463, "Asia/Kolkata"),
    entry("ranchi", 23.3441, 85.3096, "Asia/Kolkata"),
    entry("howrah", 22.5958, 88.2636, "Asia/Kolkata"),
    entry("coimbatore", 11.0168, 76.9558, "Asia/Kolkata"),
    entry("jabalpur", 23.1815, 79.9864, "Asia/Kolkata"),
    entry("gwalior", 26.2183, 78.1828, "Asia/Kolkata"),
    entry("vijayawada", 16.5062, 80.648, "Asia/Kolkata"),
    entry("jodhpur", 26.2389, 73.0243, "Asia/Kolkata"),
    entry("madurai", 9.9252, 78.1198, "Asia/Kolkata"),
    entry("raipur", 21.2514, 81.6296, "Asia/Kolkata"),
    entry("kota", 25.2138, 75.8648, "Asia/Kolkata"),
    entry("chandigarh", 30.7333, 76.7794, "Asia/Kolkata"),
    entry("gurgaon", 28.4595, 77.0266, "Asia/Kolkata"),
    entry("solapur", 17.6599, 75.9064, "Asia/Kolkata"),
    entry("hubli", 15.3647, 75.124, "Asia/Kolkata"),
    entry("tiruchirappalli", 10.7905, 78.7047, "Asia/Kolkata"),
    entry("bareilly", 28.367, 79.4304, "Asia/Kolkata"),
    entry("mysore", 12.2958, 76.6394, "Asia/Kolkata"),
    entry("tiruppur", 11.1085, 77.3411, "Asia/Kolkata"),
    entry("guwahati", 26.1445, 91.7362, "Asia/Kolkata"),
    entry("salem", 11.6643, 78.146, "Asia/Kolkata"),
    entry("mira", 19.2952, 72.8694, "Asia/Kolkata"),
    entry("thiruvananthapuram", 8.5241, 76.9366, "Asia/Kolkata"),
    entry("bhiwandi", 19.3002, 73.0635, "Asia/Kolkata"),
    entry("saharanpur", 29.968, 77.5552, "Asia/Kolkata"),
    entry("gorakhpur", 26.7606, 83.3732, "Asia/Kolkata"),
    entry("guntur", 16.3067, 80.4365, "Asia/Kolkata"),
    entry("bikaner", 28.0229, 73.3119, "Asia/Kolkata"),
    entry("amravati", 20.9374, 77.7796, "Asia/Kolkata"),
    entry("noida", 28.5355, 77.391, "Asia/Kolkata"),
    entry("jamshedpur", 22.8046, 86.2029, "Asia/Kolkata"),
    entry("bhilai", 21.1938, 81.3509, "Asia/Kolkata"),
    entry("cuttack", 20.4625, 85.8828, "Asia/Kolkata"),
    entry("firozabad", 27.1592, 78.3957, "Asia/Kolkata"),
    entry("kochi", 9.9312, 76.2673, "Asia/Kolkata"),
    entry("nellore", 14.4426, 79.9865, "Asia/Kolkata"),
    entry("bhavnagar", 21.7645, 72.1519, "Asia/Kolkata"),
    entry("dehradun", 30.3165, 78.0322, "Asia/Kolkata"),
    entry("durgapur", 23.5204, 87.3119, "Asia/Kolkata"),
    entry("asansol", 23.6739, 86.9524, "Asia/Kolkata"),
    entry("rourkela", 22.2604, 84.8536, "Asia/Kolkata"),
    entry("nanded", 19.1383, 77.321, "Asia/Kolkata"),
    entry("kolhapur", 16.705, 74.2433, "Asia/Kolkata"),
    entry("ajmer", 26.4499, 74.6399, "Asia/Kolkata"),
    entry("akola", 20.7002, 77.0082, "Asia/Kolkata"),
    entry("gulbarga", 17.3297, 76.8343, "Asia/Kolkata"),
    entry("jamnagar", 22.4707, 70.0577, "Asia/Kolkata"),
    entry("ujjain", 23.1765, 75.7885, "Asia/Kolkata"),
    entry("loni", 28.7333, 77.2833, "Asia/Kolkata"),
    entry("siliguri", 26.7271, 88.3953, "Asia/Kolkata"),
    entry("jhansi", 25.4484, 78.5685, "Asia/Kolkata"),
    entry("ulhasnagar", 19.2215, 73.1645, "Asia/Kolkata"),
    entry("jammu", 32.7266, 74.857, "Asia/Kolkata"),
    entry("sangli", 16.8524, 74.5815, "Asia/Kolkata"),
    entry("mangalore", 12.9141, 74.856, "Asia/Kolkata"),
    entry("erode", 11.341, 77.7172, "Asia/Kolkata"),
    entry("belgaum", 15.8497, 74.4977, "Asia/Kolkata"),
    entry("ambattur", 13.1143, 80.1548, "Asia/Kolkata"),
    entry("tirunelveli", 8.7139, 77.7567, "Asia/Kolkata"),
    entry("malegaon", 20.5579, 74.5287, "Asia/Kolkata"),
    entry("gaya", 24.7914, 85.0002, "Asia/Kolkata"),
    entry("jalgaon", 21.0077, 75.5626, "Asia/Kolkata"),
    entry("udaipur", 24.5854, 73.7125, "Asia/Kolkata"),
    entry("maheshtala", 22.5049, 88.2482, "Asia/Kolkata"),
    entry("sonipat", 28.9931, 77.0151, "Asia/Kolkata"),
    // International
    entry("new york", 40.7128, -74.006, "America/New_York"),
    entry("london", 51.5074, -0.1278, "Europe/London"),
    entry("tokyo", 35.6762, 139.6503, "Asia/Tokyo"),
    entry("paris", 48.8566, 2.3522, "Europe/Paris"),
    entry("sydney", -33.8688, 151.2093, "Australia/Sydney"),
    entry("dubai", 25.2048, 55.2708, "Asia/Dubai"),
    entry("singapore", 1.3521, 103.8198, "Asia/Singapore"),
    entry("hong kong", 22.3193, 114.1694, "Asia/Hong_Kong"),
    entry("los angeles", 34.0522, -118.2437, "America/Los_Angeles"),
    entry("toronto", 43.6532, -79.3832, "America/Toronto"),
    entry("berlin", 52.52, 13.405, "Europe/Berlin"),
    entry("moscow", 55.7558, 37.6176, "Europe/Moscow"),
    entry("beijing", 39.9042, 116.4074, "Asia/Shanghai"),
    entry("shanghai", 31.2304, 121.4737, "Asia/Shanghai"),
    entry("seoul", 37.5665, 126.978, "Asia/Seoul"),
    entry("bangkok", 13.7563, 100.5018, "Asia/Bangkok"),
    entry("kuala lumpur", 3.139, 101.6869, "Asia/Kuala_Lumpur"),
    entry("jakarta", -6.2088, 106.8456, "Asia/Jakarta"),
    entry("manila", 14.5995, 120.9842, "Asia/Manila"),
    entry("cairo", 30.0444, 31.2357, "Africa/Cairo"),
    entry("johannesburg", -26.2041, 28.0473, "Africa/Johannesburg"),
    entry("lagos", 6.5244, 3.3792, "Africa/Lagos"),
    entry("nairobi", -1.2921, 36.8219, "Africa/Nairobi"),
    entry("rio de janeiro", -22.9068, -43.1729, "America/Sao_Paulo"),
    entry("sao paulo", -23.5505, -46.6333, "America/Sao_Paulo"),
    entry("buenos aires", -34.6118, -58.396, "America/Argentina/Buenos_Aires"),
    entry("mexico city", 19.4326, -99.1332, "America/Mexico_City"),
    entry("lima", -12.0464, -77.0428, "America/Lima"),
    entry("bogota", 4.711, -74.0721, "America/Bogota"),
    entry("caracas", 10.4806, -66.9036, "America/Caracas"),
    entry("santiago", -33.4489, -70.6693, "America/Santiago"),
    entry("montevideo", -34.9011, -56.1645, "America/Montevideo"),
    entry("quito", -0.1807, -78.4678, "America/Guayaquil"),
    entry("la paz", -16.5, -68.1193, "America/La_Paz"),
    entry("asuncion", -25.2637, -57.5759, "America/Asuncion"),
    entry("georgetown", 6.8013, -58.1551, "America/Guyana"),
    entry("paramaribo", 5.852, -55.2038, "America/Paramaribo"),
    entry("cayenne", 4.9333, -52.3333, "America/Cayenne"),
    entry("brasilia", -15.8267, -47.9218, "America/Sao_Paulo"),
    entry("ottawa", 45.4215, -75.6972, "America/Toronto"),
    entry("washington", 38.9072, -77.0369, "America/New_York"),
    entry("canberra", -35.2809, 149.13, "Australia/Sydney"),
    entry("wellington", -41.2865, 174.7762, "Pacific/Auckland"),
    entry("suva", -18.1248, 178.4501, "Pacific/Fiji"),
    entry("port moresby", -9.4438, 147.1803, "Pacific/Port_Moresby"),
    entry("nuku'alofa", -21.1789, -175.1982, "Pacific/Tongatapu"),
    entry("apia", -13.8506, -171.7513, "Pacific/Apia"),
    entry("port vila", -17.7334, 168.3273, "Pacific/Efate"),
    entry("honiara", -9.428, 159.9729, "Pacific/Guadalcanal"),
    entry("majuro", 7.1315, 171.1845, "Pacific/Majuro"),
    entry("palikir", 6.9248, 158.1611, "Pacific/Pohnpei"),
    entry("ngerulmud", 7.5006, 134.6242, "Pacific/Palau"),
    entry("yaren", -0.5477, 166.9209, "Pacific/Nauru"),
    entry("funafuti", -8.5243, 179.1942, "Pacific/Funafuti"),
    entry("south tarawa", 1.3278, 172.9797, "Pacific/Tarawa"),
];

/// Exact lookup by an already-normalized (trimmed, lowercase) key.
pub fn lookup_exact(key: &str) -> Option<&'static GazetteerEntry> {
    GAZETTEER.iter().find(|e| e.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_normalized() {
        for e in GAZETTEER {
            assert_eq!(e.key, e.key.trim(), "{}", e.key);
            assert_eq!(e.key, e.key.to_lowercase(), "{}", e.key);
        }
    }

    #[test]
    fn keys_are_unique() {
        for (i, a) in GAZETTEER.iter().enumerate() {
            for b in &GAZETTEER[i + 1..] {
                assert_ne!(a.key, b.key);
            }
        }
    }

    #[test]
    fn coordinates_in_range() {
        for e in GAZETTEER {
            assert!((-90.0..=90.0).contains(&e.latitude), "{}", e.key);
            assert!((-180.0..=180.0).contains(&e.longitude), "{}", e.key);
        }
    }

    #[test]
    fn first_entry_is_delhi() {
        assert_eq!(GAZETTEER[0].key, "delhi");
        assert_eq!(GAZETTEER[0].point(), GeoPoint::new(28.6139, 77.209));
    }

    #[test]
    fn exact_lookup() {
        let e = lookup_exact("navi mumbai").unwrap();
        assert_eq!(e.timezone, "Asia/Kolkata");
        assert!(lookup_exact("Navi Mumbai").is_none());
    }
}
