//! Built-in phrases: household chores, dishes and grocery staples.
//!
//! Columns follow `LanguageCode::ALL`: english, hindi, tamil, telugu, kannada.

pub(super) struct RawPhrase {
    pub key: &'static str,
    pub emoji: &'static str,
    pub text: [&'static str; 5],
}

const fn p(key: &'static str, emoji: &'static str, text: [&'static str; 5]) -> RawPhrase {
    RawPhrase { key, emoji, text }
}

pub(super) const BUILTIN: &[RawPhrase] = &[
    // ── Chores ──────────────────────────────────────────────────────────────
    p("clean kitchen", "🧽", [
        "Clean kitchen",
        "रसोई साफ़ करें",
        "சமையலறையை சுத்தம் செய்யவும்",
        "వంటగది శుభ్రం చేయండి",
        "ಅಡುಗೆಮನೆ ಸ್ವಚ್ಛಗೊಳಿಸಿ",
    ]),
    p("wash dishes", "🍽️", [
        "Wash dishes",
        "बर्तन धोएं",
        "பாத்திரங்களைக் கழுவவும்",
        "గిన్నెలు కడగండి",
        "ಪಾತ್ರೆಗಳನ್ನು ತೊಳೆಯಿರಿ",
    ]),
    p("sweep floor", "🧹", [
        "Sweep the floor",
        "झाड़ू लगाएं",
        "தரையைப் பெருக்கவும்",
        "నేల ఊడ్చండి",
        "ನೆಲ ಗುಡಿಸಿ",
    ]),
    p("mop floor", "🪣", [
        "Mop the floor",
        "पोछा लगाएं",
        "தரையைத் துடைக்கவும்",
        "నేల తుడవండి",
        "ನೆಲ ಒರೆಸಿ",
    ]),
    p("clean bathroom", "🚽", [
        "Clean bathroom",
        "बाथरूम साफ़ करें",
        "குளியலறையை சுத்தம் செய்யவும்",
        "బాత్రూమ్ శుభ్రం చేయండి",
        "ಸ್ನಾನಗೃಹ ಸ್ವಚ್ಛಗೊಳಿಸಿ",
    ]),
    p("wash clothes", "👕", [
        "Wash clothes",
        "कपड़े धोएं",
        "துணிகளைத் துவைக்கவும்",
        "బట్టలు ఉతకండి",
        "ಬಟ್ಟೆ ಒಗೆಯಿರಿ",
    ]),
    p("iron clothes", "👔", [
        "Iron clothes",
        "कपड़े प्रेस करें",
        "துணிகளை இஸ்திரி செய்யவும்",
        "బట్టలు ఇస్త్రీ చేయండి",
        "ಬಟ್ಟೆ ಇಸ್ತ್ರಿ ಮಾಡಿ",
    ]),
    p("fold clothes", "🧺", [
        "Fold clothes",
        "कपड़े तह करें",
        "துணிகளை மடிக்கவும்",
        "బట్టలు మడవండి",
        "ಬಟ್ಟೆ ಮಡಚಿ",
    ]),
    p("dry clothes", "☀️", [
        "Dry the clothes",
        "कपड़े सुखाएं",
        "துணிகளைக் காயவைக்கவும்",
        "బట్టలు ఆరబెట్టండి",
        "ಬಟ್ಟೆ ಒಣಗಿಸಿ",
    ]),
    p("dust furniture", "🪑", [
        "Dust the furniture",
        "फ़र्नीचर की धूल साफ़ करें",
        "மரச்சாமான்களின் தூசியைத் தட்டவும்",
        "ఫర్నిచర్ దుమ్ము దులపండి",
        "ಪೀಠೋಪಕರಣಗಳ ಧೂಳು ಒರೆಸಿ",
    ]),
    p("make bed", "🛏️", [
        "Make the bed",
        "बिस्तर ठीक करें",
        "படுக்கையை சரிசெய்யவும்",
        "మంచం సర్దండి",
        "ಹಾಸಿಗೆ ಸರಿಪಡಿಸಿ",
    ]),
    p("change bedsheets", "🛌", [
        "Change bedsheets",
        "चादर बदलें",
        "படுக்கை விரிப்புகளை மாற்றவும்",
        "దుప్పట్లు మార్చండి",
        "ಹಾಸಿಗೆ ಹೊದಿಕೆ ಬದಲಾಯಿಸಿ",
    ]),
    p("take out trash", "🗑️", [
        "Take out the trash",
        "कचरा बाहर फेंकें",
        "குப்பையை வெளியே போடவும்",
        "చెత్త బయట పడేయండి",
        "ಕಸ ಹೊರಗೆ ಹಾಕಿ",
    ]),
    p("water plants", "🪴", [
        "Water the plants",
        "पौधों को पानी दें",
        "செடிகளுக்குத் தண்ணீர் ஊற்றவும்",
        "మొక్కలకు నీళ్ళు పోయండి",
        "ಗಿಡಗಳಿಗೆ ನೀರು ಹಾಕಿ",
    ]),
    p("clean windows", "🪟", [
        "Clean windows",
        "खिड़कियाँ साफ़ करें",
        "ஜன்னல்களை சுத்தம் செய்யவும்",
        "కిటికీలు శుభ్రం చేయండి",
        "ಕಿಟಕಿಗಳನ್ನು ಸ್ವಚ್ಛಗೊಳಿಸಿ",
    ]),
    p("clean fridge", "🧊", [
        "Clean the fridge",
        "फ्रिज साफ़ करें",
        "ஃப்ரிட்ஜை சுத்தம் செய்யவும்",
        "ఫ్రిజ్ శుభ్రం చేయండి",
        "ಫ್ರಿಜ್ ಸ್ವಚ್ಛಗೊಳಿಸಿ",
    ]),
    p("clean stove", "🔥", [
        "Clean the stove",
        "चूल्हा साफ़ करें",
        "அடுப்பை சுத்தம் செய்யவும்",
        "స్టవ్ శుభ్రం చేయండి",
        "ಒಲೆ ಸ್ವಚ್ಛಗೊಳಿಸಿ",
    ]),
    p("clean balcony", "🌇", [
        "Clean the balcony",
        "बालकनी साफ़ करें",
        "பால்கனியை சுத்தம் செய்யவும்",
        "బాల్కనీ శుభ్రం చేయండి",
        "ಬಾಲ್ಕನಿ ಸ್ವಚ್ಛಗೊಳಿಸಿ",
    ]),
    p("clean fans", "🌀", [
        "Clean the fans",
        "पंखे साफ़ करें",
        "மின்விசிறிகளை சுத்தம் செய்யவும்",
        "ఫ్యాన్లు శుభ్రం చేయండి",
        "ಫ್ಯಾನ್‌ಗಳನ್ನು ಸ್ವಚ್ಛಗೊಳಿಸಿ",
    ]),
    p("vacuum carpet", "🧼", [
        "Vacuum the carpet",
        "कालीन वैक्यूम करें",
        "கம்பளத்தை வாக்யூம் செய்யவும்",
        "తివాచీ వాక్యూమ్ చేయండి",
        "ಕಾರ್ಪೆಟ್ ವ್ಯಾಕ್ಯೂಮ್ ಮಾಡಿ",
    ]),
    p("wipe table", "🧻", [
        "Wipe the table",
        "टेबल पोंछें",
        "மேசையைத் துடைக்கவும்",
        "బల్ల తుడవండి",
        "ಮೇಜು ಒರೆಸಿ",
    ]),
    p("cut vegetables", "🔪", [
        "Cut vegetables",
        "सब्ज़ियाँ काटें",
        "காய்கறிகளை நறுக்கவும்",
        "కూరగాయలు కోయండి",
        "ತರಕಾರಿ ಹೆಚ್ಚಿ",
    ]),
    p("fill water bottles", "💧", [
        "Fill water bottles",
        "पानी की बोतलें भरें",
        "தண்ணீர் பாட்டில்களை நிரப்பவும்",
        "నీళ్ళ సీసాలు నింపండి",
        "ನೀರಿನ ಬಾಟಲಿಗಳನ್ನು ತುಂಬಿಸಿ",
    ]),
    p("buy groceries", "🛒", [
        "Buy groceries",
        "किराने का सामान खरीदें",
        "மளிகைப் பொருட்களை வாங்கவும்",
        "కిరాణా సరుకులు కొనండి",
        "ದಿನಸಿ ಖರೀದಿಸಿ",
    ]),
    p("feed pet", "🐕", [
        "Feed the pet",
        "पालतू जानवर को खाना दें",
        "செல்லப்பிராணிக்கு உணவளிக்கவும்",
        "పెంపుడు జంతువుకు ఆహారం పెట్టండి",
        "ಸಾಕುಪ್ರಾಣಿಗೆ ಆಹಾರ ನೀಡಿ",
    ]),
    p("clean shoes", "👟", [
        "Clean shoes",
        "जूते साफ़ करें",
        "காலணிகளை சுத்தம் செய்யவும்",
        "బూట్లు శుభ్రం చేయండి",
        "ಶೂಗಳನ್ನು ಸ್ವಚ್ಛಗೊಳಿಸಿ",
    ]),
    p("organize cupboard", "🗄️", [
        "Organize the cupboard",
        "अलमारी व्यवस्थित करें",
        "அலமாரியை ஒழுங்குபடுத்தவும்",
        "అల్మారా సర్దండి",
        "ಕಪಾಟು ಜೋಡಿಸಿ",
    ]),
    // ── Dishes ──────────────────────────────────────────────────────────────
    p("idli", "🍚", ["Idli", "इडली", "இட்லி", "ఇడ్లీ", "ಇಡ್ಲಿ"]),
    p("dosa", "🥞", ["Dosa", "डोसा", "தோசை", "దోశ", "ದೋಸೆ"]),
    p("masala dosa", "🥞", [
        "Masala dosa",
        "मसाला डोसा",
        "மசாலா தோசை",
        "మసాలా దోశ",
        "ಮಸಾಲೆ ದೋಸೆ",
    ]),
    p("upma", "🥣", ["Upma", "उपमा", "உப்புமா", "ఉప్మా", "ಉಪ್ಪಿಟ್ಟು"]),
    p("poha", "🍛", ["Poha", "पोहा", "அவல் உப்புமா", "అటుకుల ఉప్మా", "ಅವಲಕ್ಕಿ"]),
    p("pongal", "🍲", ["Pongal", "पोंगल", "பொங்கல்", "పొంగలి", "ಪೊಂಗಲ್"]),
    p("vada", "🍩", ["Vada", "वड़ा", "வடை", "వడ", "ವಡೆ"]),
    p("paratha", "🫓", ["Paratha", "पराठा", "பரோட்டா", "పరాటా", "ಪರೋಟ"]),
    p("aloo paratha", "🫓", [
        "Aloo paratha",
        "आलू पराठा",
        "உருளைக்கிழங்கு பரோட்டா",
        "ఆలూ పరాటా",
        "ಆಲೂ ಪರೋಟ",
    ]),
    p("chapati", "🫓", ["Chapati", "चपाती", "சப்பாத்தி", "చపాతీ", "ಚಪಾತಿ"]),
    p("rice", "🍚", ["Rice", "चावल", "சாதம்", "అన్నం", "ಅನ್ನ"]),
    p("curd rice", "🍚", [
        "Curd rice",
        "दही चावल",
        "தயிர் சாதம்",
        "పెరుగు అన్నం",
        "ಮೊಸರನ್ನ",
    ]),
    p("lemon rice", "🍋", [
        "Lemon rice",
        "नींबू चावल",
        "எலுமிச்சை சாதம்",
        "నిమ్మకాయ అన్నం",
        "ಚಿತ್ರಾನ್ನ",
    ]),
    p("dal", "🍲", ["Dal", "दाल", "பருப்பு", "పప్పు", "ಬೇಳೆ"]),
    p("sambar", "🍲", ["Sambar", "सांभर", "சாம்பார்", "సాంబార్", "ಸಾಂಬಾರ್"]),
    p("rasam", "🍵", ["Rasam", "रसम", "ரசம்", "చారు", "ಸಾರು"]),
    p("vegetable curry", "🥘", [
        "Vegetable curry",
        "सब्ज़ी",
        "காய்கறி குழம்பு",
        "కూరగాయల కూర",
        "ತರಕಾರಿ ಪಲ್ಯ",
    ]),
    p("paneer curry", "🧀", [
        "Paneer curry",
        "पनीर की सब्ज़ी",
        "பனீர் கறி",
        "పనీర్ కూర",
        "ಪನೀರ್ ಕರಿ",
    ]),
    p("chicken curry", "🍗", [
        "Chicken curry",
        "चिकन करी",
        "கோழிக் கறி",
        "చికెన్ కూర",
        "ಕೋಳಿ ಸಾರು",
    ]),
    p("fish curry", "🐟", [
        "Fish curry",
        "मछली करी",
        "மீன் குழம்பு",
        "చేపల పులుసు",
        "ಮೀನಿನ ಸಾರು",
    ]),
    p("egg curry", "🥚", [
        "Egg curry",
        "अंडा करी",
        "முட்டைக் கறி",
        "గుడ్డు కూర",
        "ಮೊಟ್ಟೆ ಸಾರು",
    ]),
    p("biryani", "🍛", ["Biryani", "बिरयानी", "பிரியாணி", "బిర్యానీ", "ಬಿರಿಯಾನಿ"]),
    p("pulao", "🍚", ["Pulao", "पुलाव", "புலாவ்", "పులావ్", "ಪಲಾವ್"]),
    p("khichdi", "🍲", ["Khichdi", "खिचड़ी", "கிச்சடி", "కిచిడీ", "ಕಿಚಡಿ"]),
    p("chole", "🫘", ["Chole", "छोले", "சோலே", "చోలే", "ಚೋಲೆ"]),
    p("rajma", "🫘", ["Rajma", "राजमा", "ராஜ்மா", "రాజ్మా", "ರಾಜ್ಮಾ"]),
    p("raita", "🥒", ["Raita", "रायता", "ராய்தா", "రైతా", "ರಾಯತ"]),
    p("salad", "🥗", ["Salad", "सलाद", "சாலட்", "సలాడ్", "ಸಲಾಡ್"]),
    p("fruit salad", "🍓", [
        "Fruit salad",
        "फ्रूट सलाद",
        "பழ சாலட்",
        "ఫ్రూట్ సలాడ్",
        "ಹಣ್ಣಿನ ಸಲಾಡ್",
    ]),
    p("soup", "🍜", ["Soup", "सूप", "சூப்", "సూప్", "ಸೂಪ್"]),
    p("omelette", "🍳", ["Omelette", "ऑमलेट", "ஆம்லெட்", "ఆమ్లెట్", "ಆಮ್ಲೆಟ್"]),
    p("boiled eggs", "🥚", [
        "Boiled eggs",
        "उबले अंडे",
        "அவித்த முட்டை",
        "ఉడికించిన గుడ్లు",
        "ಬೇಯಿಸಿದ ಮೊಟ್ಟೆ",
    ]),
    p("sandwich", "🥪", ["Sandwich", "सैंडविच", "சாண்ட்விச்", "శాండ్‌విచ్", "ಸ್ಯಾಂಡ್‌ವಿಚ್"]),
    p("pakora", "🧆", ["Pakora", "पकौड़ा", "பஜ்ஜி", "బజ్జీ", "ಬಜ್ಜಿ"]),
    p("samosa", "🥟", ["Samosa", "समोसा", "சமோசா", "సమోసా", "ಸಮೋಸ"]),
    p("tea", "☕", ["Tea", "चाय", "டீ", "టీ", "ಚಹಾ"]),
    p("coffee", "☕", ["Coffee", "कॉफ़ी", "காபி", "కాఫీ", "ಕಾಫಿ"]),
    // ── Groceries ───────────────────────────────────────────────────────────
    p("milk", "🥛", ["Milk", "दूध", "பால்", "పాలు", "ಹಾಲು"]),
    p("eggs", "🥚", ["Eggs", "अंडे", "முட்டை", "గుడ్లు", "ಮೊಟ್ಟೆ"]),
    p("curd", "🥣", ["Curd", "दही", "தயிர்", "పెరుగు", "ಮೊಸರು"]),
    p("bread", "🍞", ["Bread", "ब्रेड", "ரொட்டி", "బ్రెడ్", "ಬ್ರೆಡ್"]),
    p("onions", "🧅", ["Onions", "प्याज़", "வெங்காயம்", "ఉల్లిపాయలు", "ಈರುಳ್ಳಿ"]),
    p("tomatoes", "🍅", ["Tomatoes", "टमाटर", "தக்காளி", "టమాటాలు", "ಟೊಮೆಟೊ"]),
    p("potatoes", "🥔", [
        "Potatoes",
        "आलू",
        "உருளைக்கிழங்கு",
        "బంగాళదుంపలు",
        "ಆಲೂಗಡ್ಡೆ",
    ]),
    p("green chillies", "🌶️", [
        "Green chillies",
        "हरी मिर्च",
        "பச்சை மிளகாய்",
        "పచ్చి మిరపకాయలు",
        "ಹಸಿಮೆಣಸಿನಕಾಯಿ",
    ]),
    p("coriander", "🌿", ["Coriander", "धनिया", "கொத்தமல்லி", "కొత్తిమీర", "ಕೊತ್ತಂಬರಿ"]),
    p("bananas", "🍌", ["Bananas", "केले", "வாழைப்பழம்", "అరటిపండ్లు", "ಬಾಳೆಹಣ್ಣು"]),
    p("wheat flour", "🌾", [
        "Wheat flour",
        "आटा",
        "கோதுமை மாவு",
        "గోధుమ పిండి",
        "ಗೋಧಿ ಹಿಟ್ಟು",
    ]),
    p("sugar", "🍬", ["Sugar", "चीनी", "சர்க்கரை", "చక్కెర", "ಸಕ್ಕರೆ"]),
    p("salt", "🧂", ["Salt", "नमक", "உப்பு", "ఉప్పు", "ಉಪ್ಪು"]),
    p("cooking oil", "🛢️", [
        "Cooking oil",
        "खाने का तेल",
        "சமையல் எண்ணெய்",
        "వంట నూనె",
        "ಅಡುಗೆ ಎಣ್ಣೆ",
    ]),
    p("dish soap", "🧴", [
        "Dish soap",
        "बर्तन धोने का साबुन",
        "பாத்திரம் கழுவும் சோப்பு",
        "గిన్నెల సబ్బు",
        "ಪಾತ್ರೆ ತೊಳೆಯುವ ಸೋಪು",
    ]),
    p("detergent", "🧼", [
        "Detergent",
        "कपड़े धोने का पाउडर",
        "சலவைத் தூள்",
        "డిటర్జెంట్",
        "ಡಿಟರ್ಜೆಂಟ್",
    ]),
];
