//! The built-in ShareGood rule table.
//!
//! Order matters. Exact-match conversational rules come first, then produce
//! and food-category keywords, then the broader donation-process intents.
//! For example "thank you, apple is great" must hit `gratitude`, not `apple`.
//! Do not reorder entries to group them differently.

use super::rule::{PredicateSpec, RuleSpec};

pub const GREETING_RESPONSE: &str = "Hello! 👋 I'm the ShareGood assistant. I can help you donate surplus \
items, track your donations, or learn about our NGO partners. What would you like to do?";

pub const FAREWELL_RESPONSE: &str =
    "Goodbye! Thanks for being part of ShareGood. Every donation makes a difference. 💚";

pub const GRATITUDE_RESPONSE: &str = "You're very welcome! 😊 Is there anything else I can help you with?";

pub const APPLE_RESPONSE: &str = "Apples are a great donation! 🍎 Whole, unbruised apples keep for 1-2 weeks \
at room temperature and much longer refrigerated. Please make sure they're free of mould and soft spots before \
listing them as surplus.";

pub const BANANA_RESPONSE: &str = "Bananas are always welcome! 🍌 They ripen quickly, so please donate them \
while they're still yellow or slightly green. Overripe bananas can go to partner kitchens that bake with them.";

pub const VEGETABLES_RESPONSE: &str = "Fresh vegetables are one of the most requested items by our NGO \
partners! 🥕 Keep leafy greens cool and dry, and list root vegetables like potatoes and onions in well-ventilated \
bags. Mark the harvest or purchase date on your surplus listing if you can.";

pub const BAKERY_RESPONSE: &str = "Bread and bakery items can be donated on the day they're baked or the day \
after. 🍞 Please pack them in clean, sealed bags and mention any allergens (nuts, eggs, dairy) in the item \
description.";

pub const DAIRY_RESPONSE: &str = "Dairy products need to stay cold! 🥛 We accept sealed milk, cheese, yogurt \
and butter that are within their use-by date. Choose a pickup slot soon after listing so the cold chain isn't \
broken.";

pub const DRY_FOOD_RESPONSE: &str = "Grains and dry goods are perfect for donation. 🌾 Flour, pasta, lentils, \
cereals and canned food last a long time, as long as packaging is unopened and undamaged. NGOs can store them \
for distribution over several weeks.";

pub const HOW_TO_DONATE_RESPONSE: &str = "Donating is easy! Here's how:\n\
1. Sign in and open your donor dashboard.\n\
2. Click \"Add Surplus Item\" and describe what you have, including quantity and expiry date.\n\
3. Choose a pickup window that suits you.\n\
4. A nearby NGO accepts the request and a logistics partner collects it.\n\
You'll get a notification at every step!";

pub const TRACKING_RESPONSE: &str = "You can track every donation from your dashboard under \"My Donations\". 📦 \
Each item shows its current status: Listed, Accepted by NGO, Picked Up, or Delivered. You'll also receive a \
notification whenever the status changes.";

pub const IMPACT_RESPONSE: &str = "Your impact matters! 🌍 Your dashboard shows how many items you've donated, \
the estimated meals provided, and the NGOs you've supported. Every kilogram of food rescued helps feed people \
and keeps waste out of landfill.";

pub const LEADERBOARD_RESPONSE: &str = "The leaderboard ranks our most active donors! 🏆 You earn points for \
every completed donation and unlock badges as you reach milestones. Check the Leaderboard page to see where you \
stand.";

pub const NGO_INFO_RESPONSE: &str = "ShareGood partners with verified NGOs and community organisations that \
distribute donations to people in need. 🤝 Every NGO goes through a verification process before it can accept \
donations. You can browse partner NGOs near you from the NGO directory.";

pub const LOGISTICS_RESPONSE: &str = "Our logistics partners handle pickup and delivery. 🚚 Once an NGO accepts \
your donation, a partner is assigned to collect it during your chosen pickup window and deliver it straight to \
the NGO. You don't need to arrange transport yourself.";

pub const ELIGIBILITY_RESPONSE: &str = "We accept most surplus items in good condition:\n\
• Fresh produce, bakery items and dairy within date\n\
• Packaged and dry foods\n\
• Clothing, books and toys\n\
• Furniture and working electronics\n\
We can't accept opened food, expired products or medicines. If you're unsure, list the item and an NGO will \
let you know!";

pub const PROFILE_RESPONSE: &str = "You can manage your account from the Profile page. 👤 Update your name, \
contact details, address and notification preferences there. If you're new, sign up as a donor, NGO or \
logistics partner from the home page.";

pub const AFFIRMATIVE_RESPONSE: &str =
    "Great! 👍 Just tell me what you'd like to know about donating, tracking, or our partners.";

pub const NEGATIVE_RESPONSE: &str =
    "No problem! If you need anything later, I'm right here. Have a great day! 😊";

pub const URGENCY_RESPONSE: &str = "For time-sensitive donations, list the item right away and mark it as \
urgent. ⏰ Nearby NGOs are notified immediately and perishable items are prioritised for the next available \
pickup.";

pub const PLATFORM_OVERVIEW_RESPONSE: &str = "ShareGood connects donors with NGOs and logistics partners to \
make sure surplus food and goods reach people who need them. 🌱 Donors list items, NGOs accept them, and our \
logistics partners handle pickup and delivery. Ask me about donating, tracking, our NGO partners, or your \
impact!";

pub const DEFAULT_RESPONSE: &str = "I'm not sure I understood that. 🤔 Here are some things you can ask me \
about:\n\
• How to donate\n\
• Tracking your donations\n\
• What items we accept\n\
• Our NGO partners\n\
• Pickup and delivery\n\
• Your impact and the leaderboard";

/// The ShareGood rule table, in evaluation order.
pub const BUILTIN_RULES: &[RuleSpec] = &[
    RuleSpec {
        name: "greeting",
        predicate: PredicateSpec::Pattern(
            r"^\s*(hi|hello|hey|hiya|howdy|greetings|good (morning|afternoon|evening))\s*[!.]*\s*$",
        ),
        response: GREETING_RESPONSE,
    },
    RuleSpec {
        name: "farewell",
        predicate: PredicateSpec::Pattern(r"^\s*(bye|goodbye|good bye|see you|see ya)\s*[!.]*\s*$"),
        response: FAREWELL_RESPONSE,
    },
    RuleSpec {
        name: "gratitude",
        predicate: PredicateSpec::Keywords(&["thank", "thx"]),
        response: GRATITUDE_RESPONSE,
    },
    RuleSpec {
        name: "apple",
        predicate: PredicateSpec::Keywords(&["apple"]),
        response: APPLE_RESPONSE,
    },
    RuleSpec {
        name: "banana",
        predicate: PredicateSpec::Keywords(&["banana"]),
        response: BANANA_RESPONSE,
    },
    RuleSpec {
        name: "vegetables",
        predicate: PredicateSpec::Keywords(&[
            "vegetable",
            "veggie",
            "carrot",
            "potato",
            "tomato",
            "onion",
            "spinach",
            "lettuce",
            "cabbage",
            "broccoli",
            "cauliflower",
            "cucumber",
        ]),
        response: VEGETABLES_RESPONSE,
    },
    RuleSpec {
        name: "bakery",
        predicate: PredicateSpec::Keywords(&[
            "bread", "bakery", "baked", "pastry", "pastries", "loaf", "loaves", "croissant", "muffin", "cake",
        ]),
        response: BAKERY_RESPONSE,
    },
    RuleSpec {
        name: "dairy",
        predicate: PredicateSpec::Keywords(&[
            "milk",
            "dairy",
            "cheese",
            "yogurt",
            "yoghurt",
            "buttermilk",
            "paneer",
            "curd",
            "fresh cream",
            "ice cream",
            "sour cream",
        ]),
        response: DAIRY_RESPONSE,
    },
    RuleSpec {
        name: "dry_food",
        predicate: PredicateSpec::Keywords(&[
            "grain",
            "wheat",
            "flour",
            "lentil",
            "pasta",
            "cereal",
            "oatmeal",
            "rolled oats",
            "dry food",
            "dry goods",
            "canned",
            "non-perishable",
        ]),
        response: DRY_FOOD_RESPONSE,
    },
    RuleSpec {
        name: "how_to_donate",
        predicate: PredicateSpec::Pattern(
            r"\b(how|where)\b.*\b(can|do|to|should)\b.*\b(donate|give|contribute)\b|\b(want|wish|like|ready)\b.*\bto (donate|give|contribute)\b|\bdonation process\b|\bstart donating\b",
        ),
        response: HOW_TO_DONATE_RESPONSE,
    },
    RuleSpec {
        name: "tracking",
        predicate: PredicateSpec::Pattern(
            r"\b(track|tracking|trace)\b|\b(status|where is|where's)\b.*\b(donations?|items?|pickups?|deliver(y|ies)|requests?|orders?)\b",
        ),
        response: TRACKING_RESPONSE,
    },
    RuleSpec {
        name: "impact",
        predicate: PredicateSpec::Pattern(
            r"\b(impact|difference|meals?|lives|people (helped|served|fed)|how many people)\b",
        ),
        response: IMPACT_RESPONSE,
    },
    RuleSpec {
        name: "leaderboard",
        predicate: PredicateSpec::Pattern(r"\b(leaderboard|leader board|rank|ranking|top donors?|points|badges?)\b"),
        response: LEADERBOARD_RESPONSE,
    },
    RuleSpec {
        name: "ngo_info",
        predicate: PredicateSpec::Pattern(r"\b(ngos?|charit(y|ies)|non-?profits?|organi[sz]ations?|partners?)\b"),
        response: NGO_INFO_RESPONSE,
    },
    RuleSpec {
        name: "logistics",
        predicate: PredicateSpec::Pattern(
            r"\b(logistics|pick ?-?ups?|deliver(y|ies)?|transport(ation)?|courier|drivers?|collect(ion)?)\b",
        ),
        response: LOGISTICS_RESPONSE,
    },
    RuleSpec {
        name: "eligibility",
        predicate: PredicateSpec::Pattern(
            r"\b(what|which|can i|is it ok to|allowed|accept(ed|s)?)\b.*\b(items?|things|food|clothes|clothing|furniture|books|toys|electronics|medicines?|coats?|jackets?|shoes|blankets?)\b",
        ),
        response: ELIGIBILITY_RESPONSE,
    },
    RuleSpec {
        name: "profile",
        predicate: PredicateSpec::Pattern(r"\b(profile|account|settings|password|sign ?up|register|log ?in|username|email)\b"),
        response: PROFILE_RESPONSE,
    },
    RuleSpec {
        name: "affirmative",
        predicate: PredicateSpec::Pattern(r"^\s*(yes|yeah|yep|yup|sure|ok|okay|of course|definitely)\s*[!.]*\s*$"),
        response: AFFIRMATIVE_RESPONSE,
    },
    RuleSpec {
        name: "negative",
        predicate: PredicateSpec::Pattern(r"^\s*(no|nope|nah|not now|not really)\s*[!.]*\s*$"),
        response: NEGATIVE_RESPONSE,
    },
    RuleSpec {
        name: "urgency",
        predicate: PredicateSpec::Pattern(
            r"\b(urgent(ly)?|emergency|asap|immediately|right now|expir(e|es|ed|ing)|spoil(s|ing|ed)?)\b",
        ),
        response: URGENCY_RESPONSE,
    },
    RuleSpec {
        name: "platform_overview",
        predicate: PredicateSpec::Pattern(
            r"\b(sharegood|share good|platform|website|app|who are you|what are you|what can you do|help)\b",
        ),
        response: PLATFORM_OVERVIEW_RESPONSE,
    },
];
