//! Word lists backing the rule-based tagger and entity chunker.
//!
//! All lookups take lowercased input.

use std::collections::HashSet;

use lazy_static::lazy_static;

fn set(words: &[&'static str]) -> HashSet<&'static str> {
    words.iter().copied().collect()
}

lazy_static! {
    pub static ref DETERMINERS: HashSet<&'static str> = set(&[
        "the", "a", "an", "this", "that", "these", "those", "every", "each", "some", "any", "no",
        "another", "either", "neither", "all", "both",
    ]);

    pub static ref PREPOSITIONS: HashSet<&'static str> = set(&[
        "of", "in", "on", "at", "by", "for", "with", "about", "against", "between", "into",
        "through", "during", "before", "after", "above", "below", "to", "from", "up", "down",
        "out", "off", "over", "under", "near", "amid", "among", "across", "since", "until",
        "within", "without", "via", "per", "as", "than", "despite", "toward", "towards", "upon",
    ]);

    pub static ref PRONOUNS: HashSet<&'static str> = set(&[
        "i", "me", "my", "we", "us", "our", "you", "your", "he", "him", "his", "she", "her",
        "it", "its", "they", "them", "their", "who", "whom", "whose", "which", "what",
    ]);

    pub static ref CONJUNCTIONS: HashSet<&'static str> = set(&[
        "and", "or", "but", "nor", "yet", "so", "if", "because", "while", "although", "though",
        "whether", "when", "where",
    ]);

    pub static ref AUXILIARIES: HashSet<&'static str> = set(&[
        "is", "are", "was", "were", "be", "been", "being", "am", "has", "have", "had", "do",
        "does", "did", "will", "would", "shall", "should", "can", "could", "may", "might",
        "must", "says", "said", "say", "n't", "'s", "'re", "'ve", "'ll", "'d", "'m",
    ]);

    /// Titles that introduce a person's name and are not part of it.
    pub static ref HONORIFICS: HashSet<&'static str> = set(&[
        "mr", "mrs", "ms", "miss", "dr", "prof", "professor", "sir", "dame", "lord", "lady",
        "president", "senator", "sen", "rep", "representative", "governor", "gov", "judge",
        "justice", "minister", "chancellor", "king", "queen", "prince", "princess", "pope",
        "general", "gen", "secretary", "mayor", "chairman", "chairwoman", "ceo", "coach",
        "captain", "capt", "lt", "col", "sgt", "father", "rev", "saint", "st",
    ]);

    /// Words that mark a proper-noun run as an organization name.
    pub static ref ORGANIZATION_KEYWORDS: HashSet<&'static str> = set(&[
        "inc", "corp", "corporation", "co", "company", "ltd", "llc", "plc", "gmbh", "group",
        "holdings", "bank", "university", "college", "school", "institute", "association",
        "agency", "council", "ministry", "department", "party", "commission", "committee",
        "foundation", "federation", "union", "organization", "organisation", "fund", "bureau",
        "court", "parliament", "congress", "senate", "police", "army", "navy", "news", "times",
        "post", "journal", "network", "airlines", "airways", "motors", "technologies",
        "systems", "labs", "club", "fc", "reserve", "exchange", "board", "office", "authority",
        "service", "services", "international", "industries", "partners", "capital",
    ]);

    /// Acronyms that name places rather than organizations.
    pub static ref PLACE_ACRONYMS: HashSet<&'static str> = set(&[
        "us", "usa", "uk", "uae", "drc", "prc",
    ]);

    /// Countries, regions and major cities; multi-word names are space-joined.
    pub static ref PLACES: HashSet<&'static str> = set(&[
        "afghanistan", "albania", "algeria", "argentina", "armenia", "australia", "austria",
        "azerbaijan", "bahrain", "bangladesh", "belarus", "belgium", "bolivia", "bosnia",
        "brazil", "bulgaria", "cambodia", "cameroon", "canada", "chile", "china", "colombia",
        "congo", "croatia", "cuba", "cyprus", "czechia", "denmark", "ecuador", "egypt",
        "england", "estonia", "ethiopia", "europe", "africa", "asia", "finland", "france",
        "gaza", "georgia", "germany", "ghana", "greece", "guatemala", "haiti", "honduras",
        "hungary", "iceland", "india", "indonesia", "iran", "iraq", "ireland", "israel",
        "italy", "jamaica", "japan", "jordan", "kazakhstan", "kenya", "kosovo", "kuwait",
        "latvia", "lebanon", "libya", "lithuania", "luxembourg", "malaysia", "mali", "malta",
        "mexico", "moldova", "mongolia", "morocco", "mozambique", "myanmar", "nepal",
        "netherlands", "nicaragua", "niger", "nigeria", "norway", "oman", "pakistan",
        "palestine", "panama", "paraguay", "peru", "philippines", "poland", "portugal",
        "qatar", "romania", "russia", "rwanda", "scotland", "senegal", "serbia", "singapore",
        "slovakia", "slovenia", "somalia", "spain", "sudan", "sweden", "switzerland", "syria",
        "taiwan", "tanzania", "thailand", "tunisia", "turkey", "uganda", "ukraine", "uruguay",
        "uzbekistan", "venezuela", "vietnam", "wales", "yemen", "zambia", "zimbabwe",
        "united states", "united kingdom", "united arab emirates", "south africa",
        "south korea", "north korea", "saudi arabia", "new zealand", "sri lanka",
        "hong kong", "west bank", "latin america", "middle east", "south sudan",
        "new york", "new york city", "los angeles", "san francisco", "washington", "chicago",
        "boston", "houston", "miami", "seattle", "london", "paris", "berlin", "madrid", "rome",
        "moscow", "kyiv", "kiev", "beijing", "shanghai", "tokyo", "seoul", "delhi",
        "new delhi", "mumbai", "dubai", "cairo", "istanbul", "tehran", "baghdad", "jerusalem",
        "tel aviv", "damascus", "beirut", "brussels", "geneva", "vienna", "warsaw", "athens",
        "lisbon", "dublin", "amsterdam", "stockholm", "oslo", "toronto", "sydney",
        "melbourne", "nairobi", "lagos", "johannesburg", "mexico city", "sao paulo",
        "buenos aires", "silicon valley", "california", "texas", "florida",
    ]);

    /// Demonyms, which the chunker labels as locations.
    pub static ref DEMONYMS: HashSet<&'static str> = set(&[
        "american", "british", "chinese", "russian", "ukrainian", "french", "german",
        "israeli", "palestinian", "iranian", "indian", "japanese", "european", "african",
        "asian", "canadian", "mexican", "brazilian", "italian", "spanish", "turkish",
        "syrian", "iraqi", "afghan", "pakistani", "korean", "australian", "english",
        "scottish", "irish", "welsh", "egyptian", "saudi", "lebanese", "polish", "dutch",
        "swedish", "norwegian", "greek", "nigerian", "kenyan",
    ]);

    pub static ref FIRST_NAMES: HashSet<&'static str> = set(&[
        "james", "john", "robert", "michael", "william", "david", "richard", "joseph",
        "thomas", "charles", "daniel", "matthew", "anthony", "mark", "donald", "steven",
        "paul", "andrew", "joshua", "kevin", "brian", "george", "edward", "ronald", "timothy",
        "jason", "jeffrey", "ryan", "jacob", "gary", "nicholas", "eric", "jonathan",
        "stephen", "larry", "justin", "scott", "brandon", "benjamin", "samuel", "frank",
        "gregory", "alexander", "patrick", "jack", "dennis", "jerry", "tyler", "aaron",
        "henry", "peter", "adam", "nathan", "zachary", "kyle", "joe", "bernie", "elon",
        "jeff", "bill", "tim", "sundar", "satya", "sam", "vladimir", "xi", "emmanuel",
        "olaf", "rishi", "keir", "boris", "narendra", "volodymyr", "kamala",
        "mary", "patricia", "jennifer", "linda", "elizabeth", "barbara", "susan", "jessica",
        "sarah", "karen", "nancy", "lisa", "betty", "margaret", "sandra", "ashley",
        "kimberly", "emily", "donna", "michelle", "dorothy", "carol", "amanda", "melissa",
        "deborah", "stephanie", "rebecca", "sharon", "laura", "cynthia", "kathleen", "amy",
        "angela", "helen", "anna", "emma", "olivia", "sophia", "hillary", "ursula",
        "giorgia", "theresa", "liz", "taylor", "maria", "ana", "jose", "luis", "carlos",
        "juan", "pedro", "mohammed", "muhammad", "ahmed", "ali", "omar", "hassan",
    ]);
}

pub fn is_place(name: &str) -> bool {
    PLACES.contains(name) || DEMONYMS.contains(name) || PLACE_ACRONYMS.contains(name)
}
