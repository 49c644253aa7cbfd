//! Curated Bengali to Hindi phrase table.

pub const BUILTIN_PHRASES: &[(&str, &str)] = &[
    // Greetings and courtesy.
    ("নমস্কার", "नमस्कार"),
    ("ধন্যবাদ", "धन्यवाद"),
    ("স্বাগতম", "स्वागत है"),
    ("শুভ সকাল", "सुप्रभात"),
    ("শুভ রাত্রি", "शुभ रात्रि"),
    ("শুভ জন্মদিন", "जन्मदिन मुबारक"),
    ("আবার দেখা হবে", "फिर मिलेंगे"),
    ("ক্ষমা করবেন", "क्षमा करें"),
    ("আপনি কেমন আছেন?", "आप कैसे हैं?"),
    ("আমি ভালো আছি", "मैं ठीक हूँ"),
    ("আমি তোমাকে ভালোবাসি", "मैं तुमसे प्यार करता हूँ"),
    ("আমার নাম", "मेरा नाम"),
    ("হ্যাঁ", "हाँ"),
    ("না", "नहीं"),
    // Pronouns and question words.
    ("আমি", "मैं"),
    ("তুমি", "तुम"),
    ("আপনি", "आप"),
    ("সে", "वह"),
    ("আমরা", "हम"),
    ("আমার", "मेरा"),
    ("কী", "क्या"),
    ("কেন", "क्यों"),
    ("কোথায়", "कहाँ"),
    ("কখন", "कब"),
    // Common nouns and adjectives.
    ("মা", "माँ"),
    ("বাবা", "पिता"),
    ("ভাই", "भाई"),
    ("বোন", "बहन"),
    ("বন্ধু", "दोस्त"),
    ("রাজা", "राजा"),
    ("রানী", "रानी"),
    ("জল", "पानी"),
    ("বই", "किताब"),
    ("ঘর", "घर"),
    ("আকাশ", "आकाश"),
    ("নদী", "नदी"),
    ("ফুল", "फूल"),
    ("চাঁদ", "चाँद"),
    ("সূর্য", "सूर्य"),
    ("ভালো", "अच्छा"),
    ("সুন্দর", "सुंदर"),
    ("বাংলা", "बंगाल"),
    // Literary lines.
    (
        "যদি তোর ডাক শুনে কেউ না আসে তবে একলা চলো রে",
        "यदि तेरी पुकार सुनकर कोई न आए तो अकेले चलो रे",
    ),
    (
        "আমার সোনার বাংলা, আমি তোমায় ভালোবাসি",
        "मेरे सोने के बंगाल, मैं तुमसे प्यार करता हूँ",
    ),
    (
        "চিত্ত যেথা ভয়শূন্য, উচ্চ যেথা শির",
        "जहाँ मन भयमुक्त हो, जहाँ सिर ऊँचा हो",
    ),
    ("জনগণমন-অধিনায়ক জয় হে", "जन गण मन अधिनायक जय हे"),
    ("ধনধান্য পুষ্পে ভরা আমাদের এই বসুন্ধরা", "धन-धान्य और फूलों से भरी हमारी यह वसुंधरा"),
];
