//! Static mental health resource directory
//!
//! Exact-match, case-sensitive lookup over five countries. A miss returns the
//! placeholder local entry plus the same global list.

/// Resource listings for one country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resources {
    pub local: Vec<&'static str>,
    pub global: Vec<&'static str>,
}

const GLOBAL_RESOURCES: &[&str] = &[
    "WHO Mental Health Website: www.who.int/mental_health",
    "International Association for Suicide Prevention: www.iasp.info",
];

const DEFAULT_LOCAL: &[&str] = &["No specific resources found for your country"];

/// Look up resources by the exact country display name.
pub fn resources_for(country: &str) -> Resources {
    let local: &[&str] = match country {
        "India" => &[
            "AASRA Suicide Prevention Helpline: 91-9820466726",
            "National Institute of Mental Health and Neurosciences (NIMHANS): www.nimhans.ac.in",
            "The Live Love Laugh Foundation: www.thelivelovelaughfoundation.org",
            "Manas Foundation: www.manasfoundation.in",
            "SCARF India (Schizophrenia Research Foundation): www.scarfindia.org",
            "iCall Psychosocial Helpline: 022-25521111",
            "Vandrevala Foundation Mental Health Helpline: 1860-2662-345",
        ],
        "United States" => &[
            "National Suicide Prevention Lifeline: 1-800-273-8255",
            "Crisis Text Line: Text HOME to 741741",
            "National Alliance on Mental Illness (NAMI): www.nami.org",
            "Mental Health America: www.mhanational.org",
        ],
        "United Kingdom" => &[
            "Samaritans: 116 123",
            "Mind: www.mind.org.uk",
            "NHS Mental Health Services: www.nhs.uk/mental-health",
        ],
        "Canada" => &[
            "Crisis Services Canada: 1-833-456-4566",
            "Canadian Mental Health Association: www.cmha.ca",
            "Kids Help Phone: 1-800-668-6868",
        ],
        "Australia" => &[
            "Lifeline Australia: 13 11 14",
            "Beyond Blue: 1300 22 4636",
            "Headspace: www.headspace.org.au",
        ],
        _ => DEFAULT_LOCAL,
    };

    Resources {
        local: local.to_vec(),
        global: GLOBAL_RESOURCES.to_vec(),
    }
}
