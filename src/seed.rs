//! Built-in demo datasets.
//!
//! The directory ships with a curated investor list plus a couple of
//! non-investor entities so every type tab has content. Ratings, AUM and
//! deal counts are randomized per run to keep the demo data from looking
//! canned.

use rand::Rng;

use crate::directory::{Entity, EntityStore, EntityType};
use crate::error::Result;
use crate::news::{NewsFeed, NewsItem};
use crate::pipeline::{Deal, DealDocument, NetworkDeal, NetworkDealType, StageBoard};
use crate::portfolio::{CompanyGoal, CompanyStatus, GoalStatus, Portfolio, PortfolioCompany};

/// name, location, investor subtype, stage focus, description, website.
type InvestorRow = (&'static str, &'static str, &'static str, &'static str, &'static str, &'static str);

const INVESTOR_ROWS: &[InvestorRow] = &[
    ("[sīc] Ventures", "San Francisco, CA", "VC", "Idea or Patent, Prototype, Early Revenue, Growth", "We invest in emerging markets startups.", "https://www.sicstudio.org/ventures/ventures"),
    ("1 4 All Group", "Dubai, UAE", "Angel network", "Early Revenue, Scaling, Growth", "We invest in Financial, Consumer, Healthcare, Energy/Mining/Industrials, IT/Media, and Infrastructure sectors.", "https://1-4-all.group/"),
    ("01 Ventures", "Amsterdam, NL", "VC", "Prototype, Early Revenue", "We invest in deep tech innovations including software and hardware solutions to the world's biggest challenges.", "https://www.01ventures.com/"),
    ("1Sharpe Ventures", "Oakland, CA", "VC", "Prototype, Early Revenue, Idea or Patent", "We invest in Fintech, Real Estate Tech, Proptech, Architecture, Engineering, Construction, Supply Chain, Logistics.", "https://www.1sharpe.ventures/"),
    ("2|Twelve", "Tiburon, CA", "VC", "Prototype, Early Revenue", "We invest in B2B, Enterprise, SaaS, B2B Fintech at seed stage.", "https://212angels.com"),
    ("3CC Third Culture Capital", "Boston, MA", "VC", "Early Revenue, Scaling, Prototype, Idea or Patent", "We invest in diverse founders who innovate at the intersection of culture and healthcare delivery.", "https://3cc.io"),
    ("3one4 Capital", "Bengaluru, India", "VC", "Prototype, Early Revenue, Scaling", "We invest in SaaS, Enterprise & SMB Automation, Fintech, Consumer Internet, and Digital Health.", "https://www.3one4capital.com"),
    ("7percent Ventures", "London, UK", "VC", "Idea or Patent, Prototype, Early Revenue", "We invest in frontier (deeptech) and transformative technologies.", "http://www.7percent.vc"),
    ("10D", "Tel Aviv, Israel", "VC", "Idea or Patent, Prototype, Early Revenue", "We invest in Israeli and Israeli-related exceptional entrepreneurs, from early-stage to Seed and Series A rounds.", "https://www.10d.vc/"),
    ("10K Ventures", "Berlin, Germany", "Family office", "Idea or Patent, Prototype, Early Revenue", "We invest in early stage startups and funds globally.", "https://www.10kventures.co/"),
    ("10x Founders", "Munich, Germany", "VC", "Idea or Patent, Prototype, Early Revenue", "We invest in the most ambitious tech founders in pre/seed across Europe and the US.", "https://www.10xfounders.com/"),
    ("11 Tribes Ventures", "Chicago, IL", "VC", "Prototype, Early Revenue, Scaling", "We invest in purpose driven entrepreneurs that are creating category defining technologies.", "https://11tribes.vc/"),
    ("13o3", "London, UK", "PE fund", "Pre-IPO, Growth, Scaling, Early Revenue, Prototype", "We invest in IoT, Blockchain, Real Estate, Media, B2B Saas, Clean Energy, Supply Chain.", "https://13o3.com"),
    ("43North", "Buffalo, NY", "Incubator", "Early Revenue, Scaling", "We invest in startups that have a full-time founding team, are generating revenue, and have raised outside capital.", "https://www.43north.org/"),
    ("500 Global", "San Francisco, CA", "VC", "Idea or Patent, Prototype, Early Revenue, Scaling, Growth", "We invest in companies in markets where technology, innovation, and capital can unlock long-term value.", "https://500.co/"),
    ("645 Ventures", "New York City, USA", "VC", "Early Revenue, Prototype, Scaling", "We invest in tech-enabled businesses across SaaS, Citizen Professionals, Engineering Value Chain, and Consumer Tech.", "https://645ventures.com/"),
    ("Aezist", "Miami, FL", "Family office", "Idea or Patent, Prototype, Early Revenue, Scaling, Growth", "We invest in B2B freight-tech, insurance-tech, synthetic biology, energy, mobility, space.", "https://www.aezist.com/"),
    ("American Prudential Capital", "Houston, TX", "Family office", "Early Revenue, Scaling, Growth", "We invest in B2B companies in Texas and other states. No crypto, no cannabis.", "https://apccash.com/"),
    ("AQAL Capital", "Munich, Germany", "Family office", "Early Revenue, Prototype, Scaling", "We invest in state-of-the-art exponential technology companies which have the potential for integral impact.", "https://aqalcapital.com"),
    ("Barkawi Group", "Munich, Germany", "Family office", "Prototype, Early Revenue, Scaling", "We invest in ventures who are reshaping global supply chains through technology", "https://barkawi.com/"),
    ("Blue 9 Capital", "New York, USA", "Family office", "Early Revenue, Scaling", "We invest in FinTech, Ecommerce Tech, and blockchain startups", "https://www.blue9capital.com/"),
    ("Bluesky Equities", "Calgary, Canada", "Family office", "Early Revenue, Scaling, Growth", "We invest in global B2B technology companies with >$0 ARR.", "http://www.blueskyequities.com/"),
    ("D Squared Capital", "London, UK", "Family office", "Early Revenue, Scaling, Growth", "We invest in growth stage businesses", "https://www.dsquaredcap.com/"),
    ("Mava Ventures", "New York, USA", "Family office", "Prototype, Early Revenue, Idea or Patent", "We invest in early-stage (angel, pre-seed, seed) US-based B2B SaaS and B2B FinTech startups.", "http://mavavc.com/"),
    ("MFO Ventures", "Delray Beach, FL", "Family office", "Early Revenue, Scaling, Growth", "We invest in growing early-stage and middle-market healthcare services and healthcare technology companies.", "https://www.mfoventures.com/"),
    ("Otium Capital", "Paris, France", "Family office", "Early Revenue, Prototype, Scaling", "We invest in ambitious founders across EU/US from Pre-Seed to LBO.", "https://www.otiumcapital.com/"),
    ("Small Ventures USA", "Houston, TX", "Family office", "Early Revenue, Scaling, Growth", "We invest in three broad areas: Energy, Technology, Entertainment.", "https://www.smallventuresusa.com/"),
    ("Titan Capital", "Gurugram, India", "Family office", "Early Revenue, Prototype, Idea or Patent", "We invest in early-stage companies with a valuation cap of $6M USD. Sector agnostic.", "https://www.titancapital.vc/"),
    ("Zell Capital", "Columbus, OH", "VC", "Prototype, Early Revenue", "We invest in early-stage startups, using our Value Investment Thesis to filter opportunities.", "https://zellcapital.com"),
    ("Zephyr Angels", "Skopje, North Macedonia", "Angel network", "Prototype, Early Revenue", "We invest in all industries", "https://zephyr.mk/"),
    ("ZWC Partners", "Hong Kong", "VC", "Scaling, Early Revenue, Prototype", "We invest in early growth stage startups in China and early stage in Southeast Asia.", "https://www.zwcpartners.com/"),
];

const AUM_RANGES: &[&str] = &["$10M", "$50M", "$100M", "$250M", "$500M", "$1B", "$5B+"];

/// Build the demo directory.
///
/// # Errors
/// Never in practice; the seed ids are distinct by construction.
pub fn entity_store() -> Result<EntityStore> {
    let mut rng = rand::rng();
    let mut entities = vec![
        Entity {
            id: "advisor-1".to_string(),
            name: "Growth Catalysts M&A".to_string(),
            entity_type: EntityType::Advisor,
            description: "Buy-side advisory for first-time searchers. We help you find the needle in the haystack.".to_string(),
            location: "Chicago, IL".to_string(),
            focus_areas: ["Deal Sourcing", "Valuation", "Negotiation", "Advisor"]
                .iter().map(ToString::to_string).collect(),
            min_check_size: None,
            max_check_size: None,
            contact_email: "info@growthcat-example.com".to_string(),
            website: "https://example.com".to_string(),
            rating: 4.2,
            aum: None,
            deal_count: Some(45),
        },
        Entity {
            id: "legal-1".to_string(),
            name: "LegalEase Advisors".to_string(),
            entity_type: EntityType::Legal,
            description: "Full-service M&A legal counsel for search funds. From LOI to closing, we ensure your interests are protected.".to_string(),
            location: "New York, NY".to_string(),
            focus_areas: ["M&A", "Due Diligence", "Contract Law", "Legal"]
                .iter().map(ToString::to_string).collect(),
            min_check_size: None,
            max_check_size: None,
            contact_email: "contact@legalease-example.com".to_string(),
            website: "https://example.com".to_string(),
            rating: 4.9,
            aum: None,
            deal_count: Some(120),
        },
    ];

    for (idx, (name, location, subtype, focus, desc, website)) in INVESTOR_ROWS.iter().enumerate() {
        // The investor subtype rides along in focus areas so the
        // family-office tab can key off it.
        let mut focus_areas: Vec<String> = focus.split(',').map(|s| s.trim().to_string()).collect();
        focus_areas.push((*subtype).to_string());

        entities.push(Entity {
            id: format!("inv-{}", idx + 100),
            name: (*name).to_string(),
            entity_type: EntityType::Investor,
            description: (*desc).to_string(),
            location: (*location).to_string(),
            focus_areas,
            min_check_size: Some("$50,000".to_string()),
            max_check_size: Some("$5,000,000".to_string()),
            contact_email: "contact@example.com".to_string(),
            website: (*website).to_string(),
            rating: (rng.random_range(3.0..5.0_f64) * 10.0).round() / 10.0,
            aum: Some(AUM_RANGES[rng.random_range(0..AUM_RANGES.len())].to_string()),
            deal_count: Some(rng.random_range(1..=50)),
        });
    }

    EntityStore::new(entities)
}

/// Build the demo deal board.
///
/// # Errors
/// Never in practice; the seed deals point at default stages.
pub fn stage_board() -> Result<StageBoard> {
    let deals = vec![
        Deal {
            id: "101".to_string(),
            title: "Project Bluebird".to_string(),
            company_name: "Acme Logistics".to_string(),
            industry: "Logistics".to_string(),
            revenue: "$5.2M".to_string(),
            ebitda: "$1.1M".to_string(),
            stage: "loi".to_string(),
            description: "Regional logistics provider with a fleet of 50 trucks and stable contracts.".to_string(),
            notes: "Seller is motivated. Diligence ongoing.".to_string(),
            documents: vec![
                DealDocument {
                    id: "d1".to_string(),
                    name: "CIM_Project_Bluebird.pdf".to_string(),
                    upload_date: "2023-10-01".to_string(),
                    size: "2.4MB".to_string(),
                    doc_type: "PDF".to_string(),
                },
                DealDocument {
                    id: "d2".to_string(),
                    name: "Financials_2022.xlsx".to_string(),
                    upload_date: "2023-10-05".to_string(),
                    size: "1.1MB".to_string(),
                    doc_type: "EXCEL".to_string(),
                },
            ],
        },
        Deal {
            id: "102".to_string(),
            title: "Project Codebase".to_string(),
            company_name: "DevTools Inc".to_string(),
            industry: "SaaS".to_string(),
            revenue: "$2.8M".to_string(),
            ebitda: "$0.8M".to_string(),
            stage: "sourcing".to_string(),
            description: "Niche developer tool for API management. High margins, low churn.".to_string(),
            notes: "Initial outreach sent via broker.".to_string(),
            documents: Vec::new(),
        },
        Deal {
            id: "103".to_string(),
            title: "Project Care".to_string(),
            company_name: "Elderly Home Care LLC".to_string(),
            industry: "Healthcare".to_string(),
            revenue: "$8.5M".to_string(),
            ebitda: "$1.9M".to_string(),
            stage: "diligence".to_string(),
            description: "Multi-location home care provider in the Midwest.".to_string(),
            notes: "QofE pending. Legal review started.".to_string(),
            documents: vec![DealDocument {
                id: "d3".to_string(),
                name: "QofE_Draft.pdf".to_string(),
                upload_date: "2023-10-20".to_string(),
                size: "5.6MB".to_string(),
                doc_type: "PDF".to_string(),
            }],
        },
    ];
    StageBoard::new(StageBoard::default_stages(), deals)
}

/// Deals visible through the shared network feed.
#[must_use]
pub fn network_deals() -> Vec<NetworkDeal> {
    vec![
        NetworkDeal {
            id: "nd-1".to_string(),
            title: "Project Sky High".to_string(),
            deal_type: NetworkDealType::MergersAndAcquisitions,
            amount: "$15M".to_string(),
            sector: "Aerospace Components".to_string(),
            description: "Tier 2 aerospace supplier looking for exit. EBITDA $3M.".to_string(),
            posted_date: "2024-11-20".to_string(),
        },
        NetworkDeal {
            id: "nd-2".to_string(),
            title: "Series B - FinTech AI".to_string(),
            deal_type: NetworkDealType::CompanyRound,
            amount: "$25M".to_string(),
            sector: "FinTech".to_string(),
            description: "Rapidly growing AI-driven credit scoring platform for emerging markets.".to_string(),
            posted_date: "2024-11-22".to_string(),
        },
        NetworkDeal {
            id: "nd-3".to_string(),
            title: "Global Trade Export Facility".to_string(),
            deal_type: NetworkDealType::TradeFinance,
            amount: "$50M".to_string(),
            sector: "Logistics / Commodities".to_string(),
            description: "Structured trade finance opportunity for agricultural exports in SEA.".to_string(),
            posted_date: "2024-11-24".to_string(),
        },
        NetworkDeal {
            id: "nd-4".to_string(),
            title: "Solar Farm Development".to_string(),
            deal_type: NetworkDealType::ProjectFinance,
            amount: "$120M".to_string(),
            sector: "Energy".to_string(),
            description: "Utility-scale solar project in Arizona seeking debt/equity mix.".to_string(),
            posted_date: "2024-11-18".to_string(),
        },
        NetworkDeal {
            id: "nd-5".to_string(),
            title: "SaaS Rollup Opportunity".to_string(),
            deal_type: NetworkDealType::MergersAndAcquisitions,
            amount: "$8M".to_string(),
            sector: "Vertical SaaS".to_string(),
            description: "Portfolio of 3 profitable micro-SaaS tools in the HR tech space.".to_string(),
            posted_date: "2024-11-25".to_string(),
        },
    ]
}

#[must_use]
pub fn news_feed() -> NewsFeed {
    NewsFeed::new(vec![
        NewsItem {
            id: "n1".to_string(),
            title: "Global PE Dry Powder Hits Record $2.6 Trillion".to_string(),
            source: "PitchBook Wire".to_string(),
            date: "2024-11-25".to_string(),
            summary: "Private equity firms are sitting on record levels of unspent capital as dealmaking stabilizes in Q4, signaling a potential surge in 2025 acquisitions.".to_string(),
            tags: ["Private Equity", "Market Data", "Capital"].iter().map(ToString::to_string).collect(),
        },
        NewsItem {
            id: "n2".to_string(),
            title: "Search Fund \"Nova Capital\" Acquires Midwest Manufacturing Giant".to_string(),
            source: "M&A Today".to_string(),
            date: "2024-11-25".to_string(),
            summary: "In the largest traditional search fund deal of the quarter, Nova Capital has acquired a leading precision manufacturing firm for $45M.".to_string(),
            tags: ["M&A", "Search Funds", "Manufacturing"].iter().map(ToString::to_string).collect(),
        },
        NewsItem {
            id: "n3".to_string(),
            title: "SEC Adopts New Private Fund Adviser Rules".to_string(),
            source: "Regulatory Watch".to_string(),
            date: "2024-11-25".to_string(),
            summary: "New transparency requirements regarding quarterly statements and audit rules for private fund advisers officially take effect today.".to_string(),
            tags: ["Regulation", "SEC", "Compliance"].iter().map(ToString::to_string).collect(),
        },
        NewsItem {
            id: "n4".to_string(),
            title: "Tech Valuations Stabilize: SaaS Multiples Hold at 6.5x Revenue".to_string(),
            source: "SaaS Metrics Daily".to_string(),
            date: "2024-11-25".to_string(),
            summary: "After a volatile year, B2B SaaS valuation multiples show signs of bottoming out, providing clarity for both buyers and sellers.".to_string(),
            tags: ["SaaS", "Valuations", "Tech"].iter().map(ToString::to_string).collect(),
        },
        NewsItem {
            id: "n5".to_string(),
            title: "Blackstone Closes $5B Life Sciences Fund V".to_string(),
            source: "BioPharma Dive".to_string(),
            date: "2024-11-25".to_string(),
            summary: "Blackstone completes fundraising for its latest life sciences vehicle, exceeding its initial target by $500M.".to_string(),
            tags: ["Life Sciences", "Fundraising", "Blackstone"].iter().map(ToString::to_string).collect(),
        },
    ])
}

#[must_use]
pub fn portfolio() -> Portfolio {
    Portfolio::new(vec![
        PortfolioCompany {
            id: "port-1".to_string(),
            name: "NexGen Composites".to_string(),
            sector: "Manufacturing".to_string(),
            acquisition_date: "2019-06-15".to_string(),
            initial_investment: 5_000_000.0,
            current_value: 12_500_000.0,
            ownership_percentage: 35.0,
            irr: 22.4,
            status: CompanyStatus::Active,
            board_seat: true,
            revenue: "$32.5M".to_string(),
            ebitda: "$4.2M".to_string(),
            documents: vec![
                DealDocument {
                    id: "d1".to_string(),
                    name: "CIM_NexGen_Final.pdf".to_string(),
                    upload_date: "2019-05-01".to_string(),
                    size: "3.1MB".to_string(),
                    doc_type: "PDF".to_string(),
                },
                DealDocument {
                    id: "d2".to_string(),
                    name: "Q3_2024_Financials.xlsx".to_string(),
                    upload_date: "2024-10-15".to_string(),
                    size: "1.2MB".to_string(),
                    doc_type: "EXCEL".to_string(),
                },
            ],
            goals: vec![
                CompanyGoal {
                    id: "g1".to_string(),
                    title: "Expand to European Market".to_string(),
                    progress: 65,
                    status: GoalStatus::OnTrack,
                },
                CompanyGoal {
                    id: "g2".to_string(),
                    title: "Hire new CFO".to_string(),
                    progress: 30,
                    status: GoalStatus::AtRisk,
                },
                CompanyGoal {
                    id: "g3".to_string(),
                    title: "Implement ERP System".to_string(),
                    progress: 100,
                    status: GoalStatus::Completed,
                },
            ],
        },
        PortfolioCompany {
            id: "port-2".to_string(),
            name: "CloudScale Logistics".to_string(),
            sector: "Software / Logistics".to_string(),
            acquisition_date: "2020-02-10".to_string(),
            initial_investment: 3_200_000.0,
            current_value: 4_100_000.0,
            ownership_percentage: 20.0,
            irr: 8.5,
            status: CompanyStatus::Active,
            board_seat: false,
            revenue: "$8.2M".to_string(),
            ebitda: "$0.5M".to_string(),
            documents: vec![DealDocument {
                id: "d4".to_string(),
                name: "Shareholder_Agreement.pdf".to_string(),
                upload_date: "2020-02-10".to_string(),
                size: "1.8MB".to_string(),
                doc_type: "PDF".to_string(),
            }],
            goals: vec![CompanyGoal {
                id: "g4".to_string(),
                title: "Reach $10M ARR".to_string(),
                progress: 80,
                status: GoalStatus::OnTrack,
            }],
        },
        PortfolioCompany {
            id: "port-3".to_string(),
            name: "BioPure Health".to_string(),
            sector: "Healthcare Services".to_string(),
            acquisition_date: "2018-11-01".to_string(),
            initial_investment: 4_500_000.0,
            current_value: 18_000_000.0,
            ownership_percentage: 45.0,
            irr: 38.1,
            status: CompanyStatus::Active,
            board_seat: true,
            revenue: "$45.0M".to_string(),
            ebitda: "$9.8M".to_string(),
            documents: vec![
                DealDocument {
                    id: "d5".to_string(),
                    name: "CIM_BioPure.pdf".to_string(),
                    upload_date: "2018-10-01".to_string(),
                    size: "4.2MB".to_string(),
                    doc_type: "PDF".to_string(),
                },
                DealDocument {
                    id: "d6".to_string(),
                    name: "2023_Audit_Report.pdf".to_string(),
                    upload_date: "2024-03-15".to_string(),
                    size: "2.9MB".to_string(),
                    doc_type: "PDF".to_string(),
                },
            ],
            goals: vec![
                CompanyGoal {
                    id: "g5".to_string(),
                    title: "Acquire Competitor X".to_string(),
                    progress: 40,
                    status: GoalStatus::Delayed,
                },
                CompanyGoal {
                    id: "g6".to_string(),
                    title: "Launch Telehealth Division".to_string(),
                    progress: 100,
                    status: GoalStatus::Completed,
                },
            ],
        },
        PortfolioCompany {
            id: "port-4".to_string(),
            name: "Urban Retail Group".to_string(),
            sector: "Consumer".to_string(),
            acquisition_date: "2017-05-20".to_string(),
            initial_investment: 2_000_000.0,
            current_value: 500_000.0,
            ownership_percentage: 15.0,
            irr: -25.0,
            status: CompanyStatus::WriteOff,
            board_seat: false,
            revenue: "$2.1M".to_string(),
            ebitda: "-$0.5M".to_string(),
            documents: Vec::new(),
            goals: Vec::new(),
        },
        PortfolioCompany {
            id: "port-5".to_string(),
            name: "SecureNet AI".to_string(),
            sector: "Cybersecurity".to_string(),
            acquisition_date: "2021-08-15".to_string(),
            initial_investment: 6_000_000.0,
            current_value: 10_200_000.0,
            ownership_percentage: 25.0,
            irr: 19.5,
            status: CompanyStatus::Active,
            board_seat: true,
            revenue: "$12.5M".to_string(),
            ebitda: "-$1.2M".to_string(),
            documents: vec![DealDocument {
                id: "d7".to_string(),
                name: "Series_A_Deck.pdf".to_string(),
                upload_date: "2021-08-01".to_string(),
                size: "8.5MB".to_string(),
                doc_type: "PDF".to_string(),
            }],
            goals: Vec::new(),
        },
        PortfolioCompany {
            id: "port-6".to_string(),
            name: "Evergreen Packaging Co".to_string(),
            sector: "Industrials".to_string(),
            acquisition_date: "2016-03-12".to_string(),
            initial_investment: 3_000_000.0,
            current_value: 9_600_000.0,
            ownership_percentage: 40.0,
            irr: 26.0,
            status: CompanyStatus::Exited,
            board_seat: false,
            revenue: "$18.0M".to_string(),
            ebitda: "$3.1M".to_string(),
            documents: Vec::new(),
            goals: Vec::new(),
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::{FilterCriteria, TypeFilter};

    #[test]
    fn test_store_has_all_types() {
        let store = entity_store().unwrap();
        assert_eq!(store.len(), INVESTOR_ROWS.len() + 2);

        let count = |f: TypeFilter| {
            let criteria = FilterCriteria::new().entity_type(f);
            store.entities().iter().filter(|e| criteria.matches(e)).count()
        };
        assert_eq!(count(TypeFilter::Advisor), 1);
        assert_eq!(count(TypeFilter::Legal), 1);
        assert_eq!(count(TypeFilter::Investor), INVESTOR_ROWS.len());
        // Family offices are a strict subset of investors.
        let family = count(TypeFilter::FamilyOffice);
        assert!(family > 0 && family < INVESTOR_ROWS.len());
    }

    #[test]
    fn test_investor_ratings_in_range() {
        let store = entity_store().unwrap();
        for entity in store.entities() {
            assert!((0.0..=5.0).contains(&entity.rating), "{}", entity.id);
        }
    }

    #[test]
    fn test_board_seed_stages() {
        let board = stage_board().unwrap();
        assert_eq!(board.stages().len(), 5);
        assert_eq!(board.deals().len(), 3);
        assert_eq!(board.deals_in_stage("loi").len(), 1);
        assert_eq!(board.deals_in_stage("review").len(), 0);
    }

    #[test]
    fn test_static_feeds() {
        assert_eq!(network_deals().len(), 5);
        assert_eq!(news_feed().items().len(), 5);
        assert_eq!(portfolio().companies().len(), 6);
    }
}
